use chrono::NaiveDateTime;

const RULE: &str = "=============================================";

/// Options for the country select as `(value, label)`.
pub const COUNTRIES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("Ghana", "Ghana"),
    ("UK", "United Kingdom"),
    ("Canada", "Canada"),
    ("Germany", "Germany"),
    ("France", "France"),
    ("Australia", "Australia"),
    ("Other", "Other"),
];

pub const TOPICS: &[&str] = &[
    "ERP Systems",
    "Data Integration & Analytics",
    "Digital Transformation",
    "Cloud Infrastructure",
    "Cybersecurity",
    "General Inquiry",
    "Partnership Opportunities",
    "Other",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Company,
    JobTitle,
    Country,
    Phone,
    Topic,
    Message,
}

impl Field {
    /// DOM id and name attribute for the field.
    pub fn id(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Company => "company",
            Field::JobTitle => "jobTitle",
            Field::Country => "country",
            Field::Phone => "phone",
            Field::Topic => "topic",
            Field::Message => "message",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Field::Phone)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    pub country: String,
    pub phone: String,
    pub topic: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::JobTitle => &self.job_title,
            Field::Country => &self.country,
            Field::Phone => &self.phone,
            Field::Topic => &self.topic,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::JobTitle => &mut self.job_title,
            Field::Country => &mut self.country,
            Field::Phone => &mut self.phone,
            Field::Topic => &mut self.topic,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn subject(&self) -> String {
        format!(
            "Contact Form: {} - {} {}",
            self.topic, self.first_name, self.last_name
        )
    }

    pub fn body(&self, company_name: &str, submitted_at: NaiveDateTime) -> String {
        let phone = if self.phone.trim().is_empty() {
            "Not provided"
        } else {
            self.phone.as_str()
        };

        let body = format!(
            "Contact Form Submission from {company_name} Website
{RULE}

CONTACT INFORMATION:
--------------------
Name: {first} {last}
Email: {email}
Phone: {phone}

COMPANY INFORMATION:
--------------------
Company: {company}
Job Title: {job_title}
Country: {country}

INQUIRY DETAILS:
----------------
Topic of Interest: {topic}

MESSAGE:
--------
{message}

{RULE}
Submitted on: {stamp}",
            first = self.first_name,
            last = self.last_name,
            email = self.email,
            company = self.company,
            job_title = self.job_title,
            country = self.country,
            topic = self.topic,
            message = self.message,
            stamp = format_timestamp(submitted_at),
        );
        body.trim().to_string()
    }

    /// Builds the `mailto:` URI the browser is redirected to on submit.
    pub fn mailto_uri(
        &self,
        recipient: &str,
        company_name: &str,
        submitted_at: NaiveDateTime,
    ) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body(company_name, submitted_at)),
        )
    }
}

/// US-style local timestamp, e.g. `10/15/2026, 3:04:05 PM`.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_form() -> ContactForm {
        ContactForm {
            first_name: "Ama".into(),
            last_name: "Mensah".into(),
            email: "ama@example.com".into(),
            company: "Volta Logistics".into(),
            job_title: "CTO".into(),
            country: "Ghana".into(),
            phone: String::new(),
            topic: "Cloud Infrastructure".into(),
            message: "We need help moving to AWS.\nThanks!".into(),
        }
    }

    fn afternoon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 7)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap()
    }

    #[test]
    fn timestamp_uses_twelve_hour_clock() {
        assert_eq!(format_timestamp(afternoon()), "3/7/2026, 3:04:05 PM");
        let midnight = NaiveDate::from_ymd_opt(2026, 12, 25)
            .unwrap()
            .and_hms_opt(0, 30, 0)
            .unwrap();
        assert_eq!(format_timestamp(midnight), "12/25/2026, 12:30:00 AM");
    }

    #[test]
    fn subject_names_topic_and_visitor() {
        assert_eq!(
            sample_form().subject(),
            "Contact Form: Cloud Infrastructure - Ama Mensah"
        );
    }

    #[test]
    fn body_lists_every_section() {
        let body = sample_form().body("Stargate", afternoon());
        assert!(body.starts_with("Contact Form Submission from Stargate Website\n====="));
        assert!(body.contains("Name: Ama Mensah\nEmail: ama@example.com\nPhone: Not provided\n"));
        assert!(body.contains("Company: Volta Logistics\nJob Title: CTO\nCountry: Ghana\n"));
        assert!(body.contains("Topic of Interest: Cloud Infrastructure\n"));
        assert!(body.contains("MESSAGE:\n--------\nWe need help moving to AWS.\nThanks!\n\n====="));
        assert!(body.ends_with("Submitted on: 3/7/2026, 3:04:05 PM"));
    }

    #[test]
    fn phone_is_kept_when_provided() {
        let mut form = sample_form();
        form.set(Field::Phone, "+233 20 000 0000".into());
        let body = form.body("Stargate", afternoon());
        assert!(body.contains("Phone: +233 20 000 0000\n"));
    }

    #[test]
    fn mailto_uri_percent_encodes_subject_and_body() {
        let uri = sample_form().mailto_uri("info@stargategh.com", "Stargate", afternoon());
        assert!(uri.starts_with(
            "mailto:info@stargategh.com?subject=Contact%20Form%3A%20Cloud%20Infrastructure%20-%20Ama%20Mensah&body="
        ));
        let body = uri.split("&body=").nth(1).unwrap();
        assert!(!body.contains(' '));
        assert!(!body.contains('\n'));
        assert!(body.contains("%0A"));
        let decoded = urlencoding::decode(body).unwrap();
        assert_eq!(decoded, sample_form().body("Stargate", afternoon()));
    }

    #[test]
    fn ampersands_in_topic_cannot_break_the_query() {
        let mut form = sample_form();
        form.set(Field::Topic, "Data Integration & Analytics".into());
        let uri = form.mailto_uri("info@stargategh.com", "Stargate", afternoon());
        assert_eq!(uri.matches('&').count(), 1);
        assert!(uri.contains("Data%20Integration%20%26%20Analytics"));
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut form = ContactForm::default();
        form.set(Field::JobTitle, "Architect".into());
        assert_eq!(form.get(Field::JobTitle), "Architect");
        assert_eq!(form.job_title, "Architect");
        assert!(Field::Email.required());
        assert!(!Field::Phone.required());
    }
}
