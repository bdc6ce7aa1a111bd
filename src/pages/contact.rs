use std::rc::Rc;

use chrono::Local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::reveal::{Entrance, Reveal, Trigger};
use crate::config::SiteConfig;
use crate::mailto::{ContactForm, Field, COUNTRIES, TOPICS};
use crate::Route;

fn label_for(field: Field, text: &'static str) -> Html {
    html! {
        <label for={field.id()}>
            {text}
            { if field.required() { html! { <span class="required">{" *"}</span> } } else { html! {} } }
        </label>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let navigator = use_navigator();
    let form = use_state(ContactForm::default);
    let submitted = use_state(|| false);

    // Start at the top of the page when arriving from a scrolled home page.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let go_home = {
        Callback::from(move |_: MouseEvent| match &navigator {
            Some(navigator) => navigator.push(&Route::Home),
            None => log::warn!("no router available, cannot return home"),
        })
    };

    let update = |field: Field| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        }
    };

    let text_input = |field: Field, kind: &'static str, text: &'static str| {
        let update = update(field);
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        });
        html! {
            <div class="contact-form__field">
                { label_for(field, text) }
                <input
                    type={kind}
                    id={field.id()}
                    name={field.id()}
                    required={field.required()}
                    value={form.get(field).to_string()}
                    {oninput}
                />
            </div>
        }
    };

    let select_input = |field: Field, text: &'static str, placeholder: &'static str, options: Vec<(&'static str, &'static str)>| {
        let update = update(field);
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update(select.value());
        });
        let current = form.get(field).to_string();
        html! {
            <div class="contact-form__field">
                { label_for(field, text) }
                <select id={field.id()} name={field.id()} required={field.required()} {onchange}>
                    <option value="" selected={current.is_empty()}>{placeholder}</option>
                    {
                        options.into_iter().map(|(value, label)| html! {
                            <option {value} selected={current == value}>{label}</option>
                        }).collect::<Html>()
                    }
                </select>
            </div>
        }
    };

    let on_message = {
        let update = update(Field::Message);
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update(area.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        let config = config.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let uri = form.mailto_uri(
                &config.contact_email,
                &config.company_name,
                Local::now().naive_local(),
            );
            log::info!("Opening mail client for contact form submission");

            match web_sys::window() {
                Some(window) => {
                    if let Err(err) = window.location().set_href(&uri) {
                        log::error!("failed to open mail client: {:?}", err);
                    }
                }
                None => log::error!("no window available to open mail client"),
            }
            submitted.set(true);
        })
    };

    let body = if *submitted {
        html! {
            <Reveal trigger={Trigger::Mount} entrance={Entrance::Grow} duration={0.5} class="contact-success">
                <div class="contact-success__badge">{"✓"}</div>
                <h2>{"Thank You!"}</h2>
                <p>{"We've received your message and will get back to you shortly."}</p>
                <button class="contact-button" onclick={go_home.clone()}>
                    {"Return to Home"}
                </button>
            </Reveal>
        }
    } else {
        html! {
            <>
                <Reveal trigger={Trigger::Mount} class="contact-header">
                    <h1>{"Contact Us"}</h1>
                    <p>
                        {format!(
                            "Thank you for your interest in {} where we build for the future. \
                             If you would like to learn more or discuss how our solutions can help your business grow, \
                             please fill out the form below and we will be in touch.",
                            config.company_name
                        )}
                    </p>
                </Reveal>

                <Reveal trigger={Trigger::Mount} entrance={Entrance::Rise(30)} delay={0.2}>
                    <form class="contact-form" {onsubmit}>
                        <div class="contact-form__row">
                            { text_input(Field::FirstName, "text", "First Name") }
                            { text_input(Field::LastName, "text", "Last Name") }
                        </div>

                        { text_input(Field::Email, "email", "Email Address") }

                        <div class="contact-form__row">
                            { text_input(Field::Company, "text", "Company") }
                            { text_input(Field::JobTitle, "text", "Job Title") }
                        </div>

                        <div class="contact-form__row">
                            { select_input(Field::Country, "Country", "Select a country", COUNTRIES.to_vec()) }
                            { text_input(Field::Phone, "tel", "Phone Number") }
                        </div>

                        { select_input(
                            Field::Topic,
                            "Topic of Interest",
                            "Please select",
                            TOPICS.iter().map(|topic| (*topic, *topic)).collect(),
                        ) }

                        <div class="contact-form__field">
                            { label_for(Field::Message, "How can we help?") }
                            <textarea
                                id={Field::Message.id()}
                                name={Field::Message.id()}
                                required=true
                                rows="6"
                                placeholder="Tell us more about your needs..."
                                value={form.message.clone()}
                                oninput={on_message}
                            />
                        </div>

                        <div class="contact-form__notice">
                            <p>
                                {format!(
                                    "By submitting this form, you acknowledge that {} will process your personal information \
                                     in accordance with our Privacy Policy. We may use your information to respond to your inquiry \
                                     and provide you with information about our services.",
                                    config.company_name
                                )}
                            </p>
                        </div>

                        <div class="contact-form__submit">
                            <button type="submit" class="contact-button">{"Submit"}</button>
                        </div>
                    </form>
                </Reveal>
            </>
        }
    };

    html! {
        <div class="contact-page">
            <nav class="contact-nav">
                <div class="contact-nav__content">
                    <button class="contact-nav__back" onclick={go_home}>
                        <span class="contact-nav__arrow">{"←"}</span>
                        <span>{"Back to Home"}</span>
                    </button>
                </div>
            </nav>

            <section class="contact-section">
                <div class="contact-section__container">
                    { body }
                </div>
            </section>

            <Footer compact=true />

            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    background: #fff;
                    color: #000;
                }

                .contact-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 0.75rem 0;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(40px);
                    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
                }

                .contact-nav__content {
                    max-width: 980px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .contact-nav__back {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: none;
                    border: none;
                    padding: 0;
                    font-size: 14px;
                    font-weight: 500;
                    color: rgba(0, 0, 0, 0.8);
                    cursor: pointer;
                    transition: color 0.2s ease;
                }

                .contact-nav__back:hover {
                    color: #000;
                }

                .contact-nav__arrow {
                    font-size: 20px;
                }

                .contact-section {
                    padding: 8rem 0 5rem;
                }

                .contact-section__container {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .contact-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .contact-header h1 {
                    font-size: 3rem;
                    font-weight: 600;
                    letter-spacing: -0.025em;
                    color: rgba(0, 0, 0, 0.9);
                    margin: 0 0 1.5rem;
                }

                .contact-header p {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: rgba(0, 0, 0, 0.6);
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .contact-form__row {
                    display: grid;
                    gap: 1.5rem;
                }

                .contact-form__field label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(0, 0, 0, 0.7);
                }

                .contact-form__field .required {
                    color: #ef4444;
                }

                .contact-form__field input,
                .contact-form__field select,
                .contact-form__field textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid rgba(0, 0, 0, 0.2);
                    border-radius: 8px;
                    background: #fff;
                    color: #000;
                    font: inherit;
                    transition: all 0.2s ease;
                }

                .contact-form__field textarea {
                    resize: none;
                }

                .contact-form__field input:focus,
                .contact-form__field select:focus,
                .contact-form__field textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px rgba(0, 0, 0, 0.2);
                }

                .contact-form__notice {
                    padding: 1rem;
                    border-radius: 8px;
                    background: #f9fafb;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                }

                .contact-form__notice p {
                    margin: 0;
                    font-size: 0.75rem;
                    line-height: 1.6;
                    color: rgba(0, 0, 0, 0.6);
                }

                .contact-form__submit {
                    padding-top: 1rem;
                }

                .contact-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    padding: 1rem 3rem;
                    border: none;
                    border-radius: 9999px;
                    background: #000;
                    color: #fff;
                    font-size: 17px;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .contact-button:hover {
                    background: rgba(0, 0, 0, 0.8);
                }

                .contact-success {
                    text-align: center;
                    padding: 5rem 0;
                }

                .contact-success__badge {
                    width: 80px;
                    height: 80px;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: #dcfce7;
                    color: #16a34a;
                    font-size: 40px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .contact-success h2 {
                    font-size: 2.25rem;
                    font-weight: 600;
                    letter-spacing: -0.025em;
                    color: rgba(0, 0, 0, 0.9);
                    margin: 0 0 1rem;
                }

                .contact-success p {
                    max-width: 32rem;
                    margin: 0 auto 2rem;
                    font-size: 1.25rem;
                    color: rgba(0, 0, 0, 0.6);
                }

                .contact-success .contact-button {
                    width: auto;
                    padding: 0.75rem 2rem;
                }

                @media (min-width: 768px) {
                    .contact-header h1 {
                        font-size: 3.75rem;
                    }
                    .contact-form__row {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                    .contact-form__submit .contact-button {
                        width: auto;
                    }
                    .contact-success h2 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
