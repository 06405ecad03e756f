use yew::prelude::*;

use crate::components::button::Button;
use crate::config;
use crate::hooks::use_reveal;
use crate::navigation::{self, SectionId};

struct Credential {
    icon: &'static str,
    title: &'static str,
    institution: &'static str,
}

const CREDENTIALS: [Credential; 4] = [
    Credential { icon: "🎓", title: "Ingeniera Civil", institution: "Universidad" },
    Credential { icon: "📊", title: "Especialista en Gestión de Proyectos", institution: "UBA" },
    Credential { icon: "🌱", title: "Coach Ontológica Empresarial", institution: "ECORE - Newfield Consulting / UTDT" },
    Credential { icon: "💼", title: "+10 años de experiencia", institution: "Liderazgo en empresas industriales y de energía" },
];

#[function_component(About)]
pub fn about() -> Html {
    let reveal = use_reveal(3, config::REVEAL_THRESHOLD);

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigation::scroll_to_section(SectionId::Contact);
    });

    html! {
        <section id={SectionId::About.anchor()} class="section-padding about-section">
            <style>
                {r#"
                    .about-section {
                        background: #ffffff;
                    }
                    .about-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-photo {
                        position: relative;
                    }
                    .about-photo::before {
                        content: "";
                        position: absolute;
                        inset: 0;
                        border-radius: 1rem;
                        transform: rotate(3deg);
                        background: linear-gradient(135deg, var(--secondary-light), var(--secondary));
                    }
                    .about-photo-frame {
                        position: relative;
                        aspect-ratio: 1;
                        border-radius: 1rem;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: var(--neutral-gray);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .about-avatar {
                        width: 12rem;
                        height: 12rem;
                        border-radius: 9999px;
                        background: #ffffff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 4rem;
                        margin-bottom: 1rem;
                    }
                    .about-text p {
                        color: #374151;
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }
                    .about-text .highlight {
                        font-weight: 600;
                        color: var(--primary);
                    }
                    .about-text .closing {
                        font-weight: 500;
                        color: var(--primary-dark);
                    }
                    .credentials {
                        margin-top: 4rem;
                    }
                    .credentials h3 {
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .credential-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .credential-grid .card {
                        text-align: center;
                    }
                    .credential-icon {
                        font-size: 2.25rem;
                        margin-bottom: 0.75rem;
                    }
                "#}
            </style>
            <div class="container-custom">
                <div class="about-grid">
                    <div ref={reveal.node(0)} class={reveal.class(0)}>
                        <div class="about-photo">
                            <div class="about-photo-frame">
                                <div class="about-avatar">{"👤"}</div>
                                <p>{format!("Foto de {}", config::COACH_NAME)}</p>
                            </div>
                        </div>
                    </div>

                    <div ref={reveal.node(1)} class={classes!(reveal.class(1), "about-text")}>
                        <h2 class="section-title">{SectionId::About.label()}</h2>
                        <p>
                            {"Soy "}<span class="highlight">{config::COACH_NAME}</span>
                            {", Ingeniera Civil, Especialista en Gestión de Proyectos (UBA) y Coach Ontológica certificada por ECORE – Newfield Consulting."}
                        </p>
                        <p>{"Cuento con más de 10 años de experiencia liderando proyectos en empresas industriales y de energía."}</p>
                        <p>{"Mi formación me brindó pensamiento lógico, estructura y planificación. Sin embargo, con el tiempo descubrí que lo que más me motivaba era trabajar con personas, liderar equipos, conectar y construir en conjunto."}</p>
                        <p class="closing">{"Hoy acompaño a líderes y equipos en procesos de transformación, integrando estructura, estrategia y humanidad para lograr resultados sostenibles y culturas más saludables."}</p>
                        <Button href={SectionId::Contact.href()} onclick={to_contact}>
                            {"Conectá conmigo"}
                        </Button>
                    </div>
                </div>

                <div ref={reveal.node(2)} class={classes!(reveal.class(2), "credentials")}>
                    <h3 class="section-subtitle">{"Formación y Experiencia"}</h3>
                    <div class="credential-grid">
                        {
                            CREDENTIALS.iter().map(|credential| html! {
                                <div class="card" key={credential.title}>
                                    <div class="credential-icon">{credential.icon}</div>
                                    <h4>{credential.title}</h4>
                                    <p>{credential.institution}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
