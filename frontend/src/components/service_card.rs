use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::config;

const DEFAULT_CTA: &str = "Agendá una sesión gratis para conocer más";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub image: Option<&'static str>,
    pub description: &'static str,
    pub results: &'static [&'static str],
    pub approach: &'static [&'static str],
    pub methodology: Option<&'static str>,
    pub price: Option<&'static str>,
    pub featured: bool,
    pub cta_text: Option<&'static str>,
}

fn bullet_list(icon: &str, heading: &str, items: &[&'static str]) -> Html {
    if items.is_empty() {
        return html! {};
    }
    html! {
        <div class="service-list">
            <h4><span>{icon}</span>{heading}</h4>
            <ul>
                { for items.iter().map(|item| html! { <li>{*item}</li> }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    // session cards carry a price and show their icon instead of a thumbnail
    let thumbnail = service.image.filter(|_| service.price.is_none());

    html! {
        <div class={classes!("service-card", service.featured.then_some("featured"))}>
            if service.featured {
                <div class="featured-badge">
                    <span>{service.icon}</span>{" ¡SESIÓN GRATIS!"}
                </div>
            }
            <div class="service-body">
                {
                    match thumbnail {
                        Some(src) => html! {
                            <div class="service-thumb">
                                <img src={src} alt={format!("{} - Servicio de coaching", service.title)} loading="lazy" />
                            </div>
                        },
                        None => html! { <div class="service-icon">{service.icon}</div> },
                    }
                }
                <h3>{service.title}</h3>
                <div class="service-divider"></div>
                <p class="service-description">{service.description}</p>

                { bullet_list("📊", "Resultados Esperados", service.results) }
                { bullet_list("🎯", "Enfoque", service.approach) }

                if let Some(methodology) = service.methodology {
                    <div class="service-methodology">
                        <h4><span>{"🔧"}</span>{"Metodología"}</h4>
                        <p>{methodology}</p>
                    </div>
                }

                if let Some(price) = service.price {
                    <div class="service-price">{price}</div>
                }

                <Button
                    variant={if service.featured { ButtonVariant::Primary } else { ButtonVariant::Secondary }}
                    href={config::CALENDLY_URL}
                    external=true
                    class="service-cta"
                >
                    {service.cta_text.unwrap_or(DEFAULT_CTA)}
                </Button>
            </div>
        </div>
    }
}
