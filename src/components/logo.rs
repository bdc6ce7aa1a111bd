use std::rc::Rc;

use yew::prelude::*;

use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(200)]
    pub width: u32,
    #[prop_or(60)]
    pub height: u32,
}

/// White-on-transparent company logo. Falls back to the wordmark text
/// when the image can't be loaded.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| {
            log::warn!("logo image failed to load, showing text fallback");
            failed.set(true);
        })
    };

    if *failed {
        return html! {
            <div class="logo-fallback">{config.company_name.to_uppercase()}</div>
        };
    }

    html! {
        <img
            src={config.logo_src.clone()}
            alt={config.company_name.clone()}
            width={props.width.to_string()}
            height={props.height.to_string()}
            class={props.class.clone()}
            {onerror}
        />
    }
}
