use yew::prelude::*;

use crate::config;
use crate::controllers::carousel::CarouselOptions;
use crate::hooks::use_carousel;

#[derive(Clone, Debug, PartialEq)]
pub struct Slide {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub slides: Vec<Slide>,
    #[prop_or(Some(config::CAROUSEL_INTERVAL_MS))]
    pub interval_ms: Option<u32>,
    #[prop_or_default]
    pub start_index: Option<usize>,
}

#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let carousel = use_carousel(
        props.slides.len(),
        CarouselOptions {
            auto_advance_interval_ms: props.interval_ms,
            start_index: props.start_index,
        },
    );

    if props.slides.is_empty() {
        return html! {};
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.prev())
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.next())
    };

    let current = carousel.current();

    html! {
        <div class="image-carousel" aria-roledescription="carousel">
            <style>
                {r#"
                    .image-carousel {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(90, 116, 88, 0.2);
                        background: #ffffff;
                    }
                    .carousel-track {
                        position: relative;
                        aspect-ratio: 16 / 9;
                    }
                    .carousel-slide {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 0.7s ease;
                    }
                    .carousel-slide.current {
                        opacity: 1;
                    }
                    .carousel-slide img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .carousel-caption {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        padding: 1.5rem;
                        color: #ffffff;
                        font-weight: 600;
                        background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                    }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: none;
                        background: rgba(255, 255, 255, 0.85);
                        color: var(--primary);
                        font-size: 1.25rem;
                        cursor: pointer;
                    }
                    .carousel-arrow.prev { left: 1rem; }
                    .carousel-arrow.next { right: 1rem; }
                    .carousel-indicators {
                        position: absolute;
                        bottom: 0.75rem;
                        right: 1.5rem;
                        display: flex;
                        gap: 0.5rem;
                    }
                    .carousel-dot {
                        width: 0.6rem;
                        height: 0.6rem;
                        border-radius: 9999px;
                        border: none;
                        background: rgba(255, 255, 255, 0.5);
                        cursor: pointer;
                        padding: 0;
                    }
                    .carousel-dot.current {
                        background: #ffffff;
                        transform: scale(1.3);
                    }
                "#}
            </style>
            <div class="carousel-track" aria-live={if carousel.auto_advance() { "off" } else { "polite" }}>
                {
                    props.slides.iter().enumerate().map(|(index, slide)| {
                        html! {
                            <figure
                                key={index}
                                class={classes!("carousel-slide", (index == current).then_some("current"))}
                                aria-hidden={(index != current).to_string()}
                            >
                                <img src={slide.src} alt={slide.alt} loading="lazy" />
                                <figcaption class="carousel-caption">{slide.caption}</figcaption>
                            </figure>
                        }
                    }).collect::<Html>()
                }
            </div>
            if carousel.slide_count() > 1 {
                <>
                <button class="carousel-arrow prev" onclick={on_prev} aria-label="Anterior">{"‹"}</button>
                <button class="carousel-arrow next" onclick={on_next} aria-label="Siguiente">{"›"}</button>
                <div class="carousel-indicators">
                    {
                        (0..carousel.slide_count()).map(|index| {
                            let carousel = carousel.clone();
                            html! {
                                <button
                                    class={classes!("carousel-dot", (index == current).then_some("current"))}
                                    aria-label={format!("Ir a la imagen {}", index + 1)}
                                    onclick={Callback::from(move |_: MouseEvent| carousel.go_to(index))}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
                </>
            }
        </div>
    }
}
