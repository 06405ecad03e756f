use yew::prelude::*;

use crate::components::image_carousel::{ImageCarousel, Slide};
use crate::components::service_card::{Service, ServiceCard};
use crate::config;
use crate::hooks::{use_reveal, RevealHandle};
use crate::navigation::SectionId;

const SERVICES: [Service; 5] = [
    Service {
        title: "Coaching Ejecutivo",
        icon: "👔",
        image: Some("/imagenes/coachingEjecutivo.PNG"),
        description: "Acompañamos a líderes, mandos medios y equipos directivos en procesos de desarrollo de liderazgo, alineados con los objetivos estratégicos de la organización.",
        results: &[
            "Mayor claridad en la toma de decisiones.",
            "Comunicación más efectiva y feedback constructivo.",
            "Liderazgos más presentes, empáticos y orientados a resultados.",
            "Disminución de la sobrecarga y mejora del clima laboral.",
        ],
        approach: &[],
        methodology: Some("Sesiones individuales de coaching, donde se acompaña al líder en sus desafíos reales y se potencia su capacidad de influencia y toma de decisiones."),
        price: None,
        featured: false,
        cta_text: None,
    },
    Service {
        title: "Coaching de Equipos",
        icon: "👥",
        image: Some("/imagenes/coachingEquipos.PNG"),
        description: "Facilitamos espacios de conversación y aprendizaje compartido donde los equipos mejoran su coordinación, confianza y sentido de propósito común.",
        results: &[
            "Mejor colaboración y sinergia entre áreas.",
            "Mayor productividad y sentido de responsabilidad compartida.",
            "Menos conflictos y más innovación.",
        ],
        approach: &[],
        methodology: Some("Encuentros grupales y talleres de liderazgo, orientados a fortalecer la comunicación, la confianza y la colaboración entre pares."),
        price: None,
        featured: false,
        cta_text: None,
    },
    Service {
        title: "Transformación Organizacional",
        icon: "🔄",
        image: Some("/imagenes/descarga2.jpg"),
        description: "Diseñamos intervenciones a medida para acompañar procesos de cambio, desarrollo de liderazgo o mejora del clima.",
        results: &[],
        approach: &[
            "Diagnóstico de clima y cultura.",
            "Acompañamiento en gestión del cambio.",
            "Talleres de liderazgo, comunicación y gestión emocional.",
            "Seguimiento de impacto con indicadores cuantitativos y cualitativos.",
        ],
        methodology: Some("Reuniones de alineación con RRHH o Dirección, para asegurar coherencia con los objetivos organizacionales y evaluar avances medibles."),
        price: None,
        featured: false,
        cta_text: None,
    },
    Service {
        title: "Sesiones de Coaching Individual",
        icon: "💬",
        image: None,
        description: "Será un encuentro en el que vas a poder detenerte, mirar hacia adentro y explorar lo que hoy te está haciendo ruido o querés transformar.",
        results: &[],
        approach: &[],
        methodology: None,
        price: Some("$45.000"),
        featured: false,
        cta_text: Some("Agendar sesión"),
    },
    Service {
        title: "Sesión gratuita de 15 min",
        icon: "🎁",
        image: None,
        description: "Coordinamos una breve conversación de 15 minutos para conocernos, contarte cómo trabajo como coach y escuchar qué estás necesitando en este momento. Es un espacio sin compromiso.",
        results: &[],
        approach: &[],
        methodology: None,
        price: Some("GRATIS"),
        featured: true,
        cta_text: Some("Reservar ahora"),
    },
];

const FEATURES: [(&str, &str); 5] = [
    ("Mirada sistémica", "Entendemos la organización como un sistema interconectado."),
    ("Cuerpo, emoción y lenguaje", "Intervenimos en los tres dominios del aprendizaje humano."),
    ("Prácticas de liderazgo", "Feedback, coordinación, escucha y conversaciones efectivas."),
    ("Gestión del cambio", "Acompañamos a líderes en procesos de transformación real."),
    ("Estructuras liberadoras", "Facilitamos la participación colectiva."),
];

const PACKAGES: [(&str, Option<&str>, &str); 2] = [
    (
        "Paquete Inicial",
        Some("10 horas mensuales"),
        "Acompañamiento a líderes o equipos. Incluye sesiones, reuniones de seguimiento y diseño de plan de acción.",
    ),
    ("Sesión individual", None, "Coaching individual o sesión de equipo."),
];

const REASONS: [&str; 3] = [
    "Combinamos mirada humana y pensamiento estructurado: la sensibilidad del coaching con la precisión de la ingeniería.",
    "Nos enfocamos en impactar resultados, no solo en generar reflexión.",
    "Traducimos lo intangible del desarrollo humano en indicadores de negocio: retención, productividad, compromiso y calidad.",
];

fn slides() -> Vec<Slide> {
    SERVICES
        .iter()
        .filter_map(|service| {
            service.image.map(|src| Slide {
                src,
                alt: service.title,
                caption: service.title,
            })
        })
        .collect()
}

// Reveal slots: header, carousel, one per service, proposal heading, three proposal cards, closing CTA.
const HEADER: usize = 0;
const CAROUSEL: usize = 1;
const FIRST_CARD: usize = 2;
const PROPOSAL: usize = FIRST_CARD + SERVICES.len();
const FIRST_INFO: usize = PROPOSAL + 1;
const CLOSING: usize = FIRST_INFO + 3;
const REVEAL_SLOTS: usize = CLOSING + 1;

fn delay(position: usize) -> String {
    format!("animation-delay: {}ms", position * 100)
}

fn info_card(reveal: &RevealHandle, slot: usize, icon: &str, title: &str, body: Html) -> Html {
    html! {
        <div ref={reveal.node(slot)} class={classes!(reveal.class(slot), "info-card")} style={delay(slot - FIRST_CARD)}>
            <div class="info-header">
                <span>{icon}</span>
                <h4>{title}</h4>
            </div>
            <div class="info-body">{body}</div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let reveal = use_reveal(REVEAL_SLOTS, config::REVEAL_THRESHOLD);
    let slides = use_memo(|_| slides(), ());

    let how_we_work = html! {
        <>
            <p class="info-lead">{"Combinamos:"}</p>
            <p class="info-pillars">{"Coaching Ontológico + Gestión de proyectos + Inteligencia emocional aplicada al liderazgo"}</p>
            <p>{"Creamos espacios de reflexión y acción que permiten a las personas mirar hacia adentro, reconocer sus patrones de comunicación y liderazgo, y diseñar nuevas formas de vincularse con sus equipos."}</p>
            {
                FEATURES.iter().map(|(label, desc)| html! {
                    <div class="info-feature" key={*label}>
                        <h5>{*label}</h5>
                        <p>{*desc}</p>
                    </div>
                }).collect::<Html>()
            }
        </>
    };

    let investment = html! {
        <>
            <p>{"Cada propuesta se diseña a medida según el alcance, cantidad de participantes y objetivos del proceso."}</p>
            <p class="info-lead">{"Buscamos que la inversión refleje el valor del acompañamiento y el impacto que genera en la organización."}</p>
            <div class="info-packages">
                <p class="info-lead">{"Nuestras propuestas estándar:"}</p>
                {
                    PACKAGES.iter().map(|(name, hours, desc)| html! {
                        <div class="info-package" key={*name}>
                            <h5>{*name}</h5>
                            if let Some(hours) = hours {
                                <p class="info-hours">{*hours}</p>
                            }
                            <p>{*desc}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <p class="info-note">{"Te invitamos a coordinar una consulta inicial gratuita (sin compromiso) para conocernos y diseñar juntos la mejor modalidad para vos y/o tu equipo."}</p>
        </>
    };

    let why_us = REASONS
        .iter()
        .map(|reason| html! {
            <div class="info-reason" key={*reason}>
                <span>{"✓"}</span>
                <p>{*reason}</p>
            </div>
        })
        .collect::<Html>();

    html! {
        <section
            id={SectionId::Services.anchor()}
            class="services-section"
            aria-label="Servicios de coaching ejecutivo, coaching de equipos y transformación organizacional"
        >
            <style>
                {r#"
                    .services-section {
                        position: relative;
                        overflow: hidden;
                        padding: 5rem 1.5rem;
                        background: linear-gradient(180deg, #fefcea 0%, #f8faf5 30%, #e8f0e4 70%, #d4e5d0 100%);
                    }
                    .services-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .services-tag {
                        display: inline-block;
                        padding: 0.25rem 1rem;
                        margin-bottom: 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: var(--primary);
                        background: rgba(90, 116, 88, 0.1);
                    }
                    .services-header p {
                        max-width: 48rem;
                        margin: 0 auto;
                        font-size: 1.25rem;
                        color: #374151;
                    }
                    .services-carousel {
                        max-width: 56rem;
                        margin: 0 auto 4rem;
                    }
                    .services-grid, .info-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        position: relative;
                        height: 100%;
                        border-radius: 1rem;
                        background: #ffffff;
                        box-shadow: 0 10px 30px rgba(90, 116, 88, 0.12);
                        overflow: hidden;
                        transition: transform 0.4s ease;
                    }
                    .service-card:hover {
                        transform: translateY(-4px);
                    }
                    .service-card.featured {
                        border: 2px solid var(--accent-lime);
                    }
                    .featured-badge {
                        background: linear-gradient(to right, var(--secondary), var(--accent-lime));
                        color: #ffffff;
                        font-weight: 700;
                        text-align: center;
                        padding: 0.5rem;
                    }
                    .service-body {
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .service-thumb img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        border-radius: 0.75rem;
                    }
                    .service-icon {
                        font-size: 3rem;
                    }
                    .service-divider {
                        width: 4rem;
                        height: 0.2rem;
                        background: linear-gradient(to right, var(--secondary), var(--accent-lime));
                    }
                    .service-list h4, .service-methodology h4 {
                        display: flex;
                        gap: 0.5rem;
                        color: var(--primary);
                    }
                    .service-list ul {
                        padding-left: 1.25rem;
                        color: #4b5563;
                    }
                    .service-price {
                        font-size: 1.75rem;
                        font-weight: 700;
                        color: var(--primary);
                    }
                    .service-cta {
                        margin-top: auto;
                        text-align: center;
                    }
                    .proposal-heading {
                        text-align: center;
                        margin: 6rem 0 3rem;
                    }
                    .info-card {
                        border-radius: 1rem;
                        overflow: hidden;
                        background: #ffffff;
                        box-shadow: 0 20px 40px rgba(90, 116, 88, 0.15);
                    }
                    .info-header {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1.5rem;
                        color: #ffffff;
                        font-size: 1.5rem;
                        background: linear-gradient(to right, #5a7458, #7a9477);
                    }
                    .info-body {
                        padding: 1.5rem;
                        color: #374151;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .info-lead {
                        font-weight: 600;
                        color: var(--primary);
                    }
                    .info-pillars {
                        font-style: italic;
                        color: var(--secondary);
                    }
                    .info-feature, .info-reason {
                        border-left: 3px solid #7a9477;
                        padding-left: 0.75rem;
                    }
                    .info-reason {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .info-package {
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                    }
                    .info-hours {
                        font-size: 0.8rem;
                        color: #7a9477;
                    }
                    .info-note {
                        font-style: italic;
                        font-size: 0.85rem;
                    }
                    .services-closing {
                        margin-top: 5rem;
                        text-align: center;
                        padding: 3.5rem 2rem;
                        border-radius: 1.5rem;
                        color: #ffffff;
                        background: linear-gradient(135deg, #5a7458, #6b8468, #7a9477);
                    }
                    .services-closing a {
                        display: inline-block;
                        margin-top: 2rem;
                        padding: 1rem 2.5rem;
                        border-radius: 0.75rem;
                        font-weight: 700;
                        text-decoration: none;
                        color: #5a7458;
                        background: #ffffff;
                    }
                "#}
            </style>
            <div class="container-custom">
                <div ref={reveal.node(HEADER)} class={classes!(reveal.class(HEADER), "services-header")}>
                    <span class="services-tag">{"Coaching Organizacional"}</span>
                    <h2 class="section-title">{"Servicios de Coaching Ontológico Empresarial"}</h2>
                    <p>{"Acompaño a líderes, equipos y profesionales a alcanzar sus objetivos fortaleciendo el liderazgo, la comunicación y la confianza."}</p>
                </div>

                <div ref={reveal.node(CAROUSEL)} class={classes!(reveal.class(CAROUSEL), "services-carousel")}>
                    <ImageCarousel slides={(*slides).clone()} />
                </div>

                <div class="services-grid">
                    {
                        SERVICES.iter().enumerate().map(|(offset, service)| {
                            let slot = FIRST_CARD + offset;
                            html! {
                                <div key={service.title} ref={reveal.node(slot)} class={reveal.class(slot)} style={delay(offset)}>
                                    <ServiceCard service={service.clone()} />
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>

                <div ref={reveal.node(PROPOSAL)} class={classes!(reveal.class(PROPOSAL), "proposal-heading")}>
                    <h3 class="section-subtitle">{"Conoce Más Sobre Nuestra Propuesta"}</h3>
                </div>
                <div class="info-grid">
                    { info_card(&reveal, FIRST_INFO, "🔧", "Cómo Trabajamos", how_we_work) }
                    { info_card(&reveal, FIRST_INFO + 1, "💰", "Propuesta de Inversión", investment) }
                    { info_card(&reveal, FIRST_INFO + 2, "⭐", "Por Qué Elegirnos", why_us) }
                </div>

                <div ref={reveal.node(CLOSING)} class={classes!(reveal.class(CLOSING), "services-closing")}>
                    <span class="services-closing-icon">{"💡"}</span>
                    <h3>{"¿No sabés cuál es el servicio ideal para vos?"}</h3>
                    <p>{"Agendá una sesión gratuita de 15 minutos y conversemos sobre tus necesidades. Sin compromiso."}</p>
                    <a href={config::CALENDLY_URL} target="_blank" rel="noopener noreferrer">
                        {"Agendar Sesión Gratuita"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_shows_every_service_with_a_picture() {
        let slides = slides();
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].src, "/imagenes/coachingEjecutivo.PNG");
        assert_eq!(slides[2].alt, "Transformación Organizacional");
    }

    #[test]
    fn only_the_free_session_is_featured() {
        let featured: Vec<_> = SERVICES.iter().filter(|s| s.featured).map(|s| s.title).collect();
        assert_eq!(featured, vec!["Sesión gratuita de 15 min"]);
    }

    #[test]
    fn reveal_slots_cover_every_block() {
        assert_eq!(REVEAL_SLOTS, 12);
        assert_eq!(delay(3), "animation-delay: 300ms");
    }
}
