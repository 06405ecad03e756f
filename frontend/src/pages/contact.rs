use log::{info, warn};
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::button::Button;
use crate::config;
use crate::error::ContactError;
use crate::hooks::use_reveal;
use crate::navigation::SectionId;

const BOOKING_TEXT: &str = "Hola! Me gustaría agendar una sesión gratuita de 15 minutos";

/// `api.whatsapp.com/send` link to the coach's number, optionally prefilled.
pub fn whatsapp_link(text: Option<&str>) -> String {
    let mut url = format!("{}?phone={}", config::WHATSAPP_SEND_URL, config::WHATSAPP_PHONE);
    if let Some(text) = text {
        url.push_str("&text=");
        url.push_str(&urlencoding::encode(text));
    }
    url
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactForm {
    pub fn with(mut self, field: Field, value: String) -> Self {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
        self
    }

    /// Phone is optional; everything else must hold more than whitespace.
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [("name", &self.name), ("email", &self.email), ("message", &self.message)];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ContactError::MissingField(*field)),
            None => Ok(()),
        }
    }

    pub fn whatsapp_message(&self) -> String {
        format!(
            "Hola! Me contacto desde el sitio web.\n\nNombre: {}\nEmail: {}\nTeléfono: {}\nMensaje: {}",
            self.name, self.email, self.phone, self.message
        )
    }

    pub fn whatsapp_url(&self) -> Result<String, ContactError> {
        self.validate()?;
        Ok(whatsapp_link(Some(&self.whatsapp_message())))
    }
}

struct ContactChannel {
    icon: &'static str,
    title: &'static str,
    content: &'static str,
    subtitle: Option<&'static str>,
    link: Option<(&'static str, &'static str)>,
}

const CHANNELS: [ContactChannel; 4] = [
    ContactChannel {
        icon: "📱",
        title: "WhatsApp",
        content: config::WHATSAPP_DISPLAY,
        subtitle: None,
        link: Some(("https://api.whatsapp.com/send?phone=5491136677321", "Enviar mensaje")),
    },
    ContactChannel {
        icon: "📧",
        title: "Email",
        content: config::CONTACT_EMAIL,
        subtitle: None,
        link: Some(("mailto:luciavallejo@coachingderaiz.com", "Enviar email")),
    },
    ContactChannel {
        icon: "📍",
        title: "Ubicación",
        content: "CABA y zona norte",
        subtitle: Some("Buenos Aires, Argentina"),
        link: None,
    },
    ContactChannel {
        icon: "📸",
        title: "Instagram",
        content: config::INSTAGRAM_HANDLE,
        subtitle: None,
        link: Some((config::INSTAGRAM_URL, "Seguir")),
    },
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let reveal = use_reveal(3, config::REVEAL_THRESHOLD);
    let form = use_state(ContactForm::default);
    let is_submitting = use_state(|| false);
    let error = use_state(|| None::<ContactError>);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| form.set((*form).clone().with(field, value)))
    };
    let input_handler = |field: Field| {
        let update = on_input(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit(input.value());
        })
    };
    let message_handler = {
        let update = on_input(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update.emit(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            is_submitting.set(true);

            match form.whatsapp_url() {
                Ok(url) => {
                    let opened = window()
                        .map(|w| w.open_with_url_and_target(&url, "_blank"))
                        .transpose();
                    match opened {
                        Ok(_) => info!("Opened WhatsApp with the contact message"),
                        Err(err) => warn!("Could not open WhatsApp: {:?}", err),
                    }
                    form.set(ContactForm::default());
                    error.set(None);
                }
                Err(err) => {
                    warn!("Contact form rejected: {}", err);
                    error.set(Some(err));
                }
            }

            is_submitting.set(false);
        })
    };

    html! {
        <section id={SectionId::Contact.anchor()} class="section-padding contact-section">
            <style>
                {r#"
                    .contact-section {
                        background: linear-gradient(135deg, var(--neutral-beige), var(--neutral-cream), var(--neutral-yellow));
                    }
                    .contact-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .contact-form-card, .contact-cta {
                        background: #ffffff;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.25rem;
                    }
                    .contact-form label {
                        display: block;
                        font-size: 0.9rem;
                        font-weight: 600;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 2px solid #d1d5db;
                        border-radius: 0.5rem;
                        font: inherit;
                    }
                    .contact-form input:focus, .contact-form textarea:focus {
                        outline: none;
                        border-color: var(--secondary);
                    }
                    .contact-form textarea {
                        resize: none;
                    }
                    .form-error {
                        color: #b91c1c;
                        font-size: 0.9rem;
                    }
                    .form-hint {
                        text-align: center;
                        font-size: 0.85rem;
                        color: #4b5563;
                    }
                    .contact-channels {
                        border-radius: 1rem;
                        padding: 2rem;
                        color: #ffffff;
                        margin-bottom: 1.5rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        background: linear-gradient(135deg, var(--primary), var(--primary-deeper));
                    }
                    .contact-channel {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .contact-channel-icon {
                        font-size: 2.25rem;
                    }
                    .contact-channel a {
                        color: var(--accent-lime);
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .contact-cta {
                        text-align: center;
                        border: 2px solid var(--accent-lime);
                    }
                "#}
            </style>
            <div class="container-custom">
                <div ref={reveal.node(0)} class={classes!(reveal.class(0), "contact-header")}>
                    <h2 class="section-title">{SectionId::Contact.label()}</h2>
                    <div class="section-divider"></div>
                    <p>{"¿Tenés alguna consulta? ¿Querés agendar una sesión? Escribime y conversemos"}</p>
                </div>

                <div class="contact-grid">
                    <div ref={reveal.node(1)} class={reveal.class(1)}>
                        <div class="contact-form-card">
                            <h3>{"Dejame tu mensaje"}</h3>
                            <form class="contact-form" {onsubmit}>
                                <div>
                                    <label for="name">{"Nombre completo *"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required=true
                                        value={form.name.clone()}
                                        oninput={input_handler(Field::Name)}
                                        placeholder="Tu nombre"
                                    />
                                </div>
                                <div>
                                    <label for="email">{"Email *"}</label>
                                    <input
                                        type="email"
                                        id="email"
                                        name="email"
                                        required=true
                                        value={form.email.clone()}
                                        oninput={input_handler(Field::Email)}
                                        placeholder="tu@email.com"
                                    />
                                </div>
                                <div>
                                    <label for="phone">{"Teléfono"}</label>
                                    <input
                                        type="tel"
                                        id="phone"
                                        name="phone"
                                        value={form.phone.clone()}
                                        oninput={input_handler(Field::Phone)}
                                        placeholder="+54 9 11 1234-5678"
                                    />
                                </div>
                                <div>
                                    <label for="message">{"Mensaje *"}</label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        required=true
                                        rows="5"
                                        value={form.message.clone()}
                                        oninput={message_handler}
                                        placeholder="Contame en qué puedo ayudarte..."
                                    />
                                </div>
                                if let Some(err) = &*error {
                                    <p class="form-error">{err.to_string()}</p>
                                }
                                <Button kind="submit" disabled={*is_submitting}>
                                    { if *is_submitting { "Enviando..." } else { "Enviar mensaje por WhatsApp" } }
                                </Button>
                                <p class="form-hint">{"Al enviar, se abrirá WhatsApp con tu mensaje prellenado"}</p>
                            </form>
                        </div>
                    </div>

                    <div ref={reveal.node(2)} class={reveal.class(2)}>
                        <div class="contact-channels">
                            <h3>{"Otras formas de contacto"}</h3>
                            {
                                CHANNELS.iter().map(|channel| html! {
                                    <div class="contact-channel" key={channel.title}>
                                        <div class="contact-channel-icon">{channel.icon}</div>
                                        <div>
                                            <h4>{channel.title}</h4>
                                            <p>{channel.content}</p>
                                            if let Some(subtitle) = channel.subtitle {
                                                <p class="contact-channel-subtitle">{subtitle}</p>
                                            }
                                            if let Some((href, text)) = channel.link {
                                                <a {href} target="_blank" rel="noopener noreferrer">{format!("{} →", text)}</a>
                                            }
                                        </div>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>

                        <div class="contact-cta">
                            <div class="contact-channel-icon">{"🎁"}</div>
                            <h4>{"Sesión gratuita de 15 minutos"}</h4>
                            <p>{"¿Querés saber si el coaching es para vos? Agendá una charla sin compromiso."}</p>
                            <Button href={whatsapp_link(Some(BOOKING_TEXT))} external=true>
                                {"Agendar ahora"}
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::default()
            .with(Field::Name, "Ana".into())
            .with(Field::Email, "ana@example.com".into())
            .with(Field::Message, "Quiero una sesión".into())
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        assert_eq!(ContactForm::default().validate(), Err(ContactError::MissingField("name")));

        let no_email = filled().with(Field::Email, "   ".into());
        assert_eq!(no_email.validate(), Err(ContactError::MissingField("email")));

        let no_message = filled().with(Field::Message, "\n".into());
        assert_eq!(no_message.whatsapp_url(), Err(ContactError::MissingField("message")));
    }

    #[test]
    fn phone_is_optional() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn message_lists_every_field() {
        let form = filled().with(Field::Phone, "11 1234".into());
        assert_eq!(
            form.whatsapp_message(),
            "Hola! Me contacto desde el sitio web.\n\nNombre: Ana\nEmail: ana@example.com\nTeléfono: 11 1234\nMensaje: Quiero una sesión"
        );
    }

    #[test]
    fn url_encodes_the_whole_message() {
        let url = filled().with(Field::Message, "Café & charla".into()).whatsapp_url().unwrap();
        assert!(url.starts_with("https://api.whatsapp.com/send?phone=5491136677321&text=Hola%21%20Me%20contacto"));
        assert!(url.contains("%0A%0ANombre%3A%20Ana"));
        assert!(url.contains("Caf%C3%A9%20%26%20charla"));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn plain_link_has_no_text() {
        assert_eq!(whatsapp_link(None), "https://api.whatsapp.com/send?phone=5491136677321");
    }
}
