use yew::prelude::*;

use crate::components::button::Button;
use crate::config;
use crate::hooks::use_reveal;
use crate::navigation::SectionId;

const ASPECTS: [(&str, &str, &str); 4] = [
    (
        "🌱",
        "¿Qué es el Coaching Ontológico?",
        "Es una disciplina que acompaña a personas y equipos en procesos de transformación profunda. No se trata de dar consejos ni de decirte qué hacer, sino de generar espacios de reflexión donde puedas observar tu manera de ser, tus patrones y creencias, para elegir con mayor conciencia.",
    ),
    (
        "🎯",
        "¿Para qué sirve?",
        "Para expandir tu capacidad de acción, mejorar tus relaciones, fortalecer tu liderazgo y alcanzar resultados que antes no podías ver. Es una herramienta poderosa tanto para el desarrollo personal como para el crecimiento organizacional.",
    ),
    (
        "💭",
        "¿Cómo funciona?",
        "A través de conversaciones profundas y preguntas que te invitan a reflexionar. El coaching ontológico trabaja desde el lenguaje, las emociones y el cuerpo para que puedas transformar tu forma de observar el mundo y actuar en él.",
    ),
    (
        "🔍",
        "Diferencias con otras disciplinas",
        "No es terapia (no trabaja el pasado), no es mentoría (no te dice qué hacer), ni consultoría (no soluciona por vos). Es un proceso donde vos sos protagonista de tu propio cambio, y yo te acompaño a ver lo que no estás viendo.",
    ),
];

#[function_component(WhatIsCoaching)]
pub fn what_is_coaching() -> Html {
    // header, the aspect cards, closing call to action
    let reveal = use_reveal(ASPECTS.len() + 2, config::REVEAL_THRESHOLD);
    let closing = ASPECTS.len() + 1;

    html! {
        <section id={SectionId::Coaching.anchor()} class="section-padding coaching-section">
            <style>
                {r#"
                    .coaching-section {
                        background: #ffffff;
                    }
                    .coaching-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .coaching-header p {
                        max-width: 48rem;
                        margin: 0 auto;
                        font-size: 1.25rem;
                        color: #374151;
                    }
                    .aspect-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .aspect-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .coaching-cta {
                        text-align: center;
                        padding: 3rem 2rem;
                        border-radius: 1rem;
                        border: 2px solid var(--secondary-light);
                        background: linear-gradient(to right, var(--neutral-cream), var(--neutral-beige));
                    }
                    .coaching-cta p {
                        max-width: 42rem;
                        margin: 0 auto 1.5rem;
                        font-size: 1.1rem;
                        color: #374151;
                    }
                "#}
            </style>
            <div class="container-custom">
                <div ref={reveal.node(0)} class={classes!(reveal.class(0), "coaching-header")}>
                    <h2 class="section-title">{"¿Qué es el Coaching?"}</h2>
                    <div class="section-divider"></div>
                    <p>{"Descubrí cómo el coaching ontológico puede transformar tu manera de liderar, relacionarte y crecer"}</p>
                </div>

                <div class="aspect-grid">
                    {
                        ASPECTS.iter().enumerate().map(|(offset, (icon, title, description))| {
                            let slot = offset + 1;
                            html! {
                                <div
                                    key={*title}
                                    ref={reveal.node(slot)}
                                    class={classes!(reveal.class(slot), "card")}
                                    style={format!("animation-delay: {}ms", offset * 100)}
                                >
                                    <div class="aspect-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div ref={reveal.node(closing)} class={classes!(reveal.class(closing), "coaching-cta")}>
                    <h3>{"¿Querés experimentar el coaching?"}</h3>
                    <p>{"Te invito a una sesión gratuita de 15 minutos donde podemos conversar sobre tus inquietudes y ver si el coaching es lo que estás buscando."}</p>
                    <Button href={config::WHATSAPP_BOOKING_LINK} external=true>
                        {"Agendar sesión gratuita"}
                    </Button>
                </div>
            </div>
        </section>
    }
}
