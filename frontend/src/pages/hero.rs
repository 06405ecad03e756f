use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::config;
use crate::hooks::use_reveal;
use crate::navigation::{self, SectionId};

#[function_component(Hero)]
pub fn hero() -> Html {
    let reveal = use_reveal(5, config::REVEAL_THRESHOLD);

    let to_about = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        navigation::scroll_to_section(SectionId::About);
    });

    html! {
        <section id={SectionId::Home.anchor()} class="hero-section">
            <style>
                {r#"
                    .hero-section {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        position: relative;
                        overflow: hidden;
                        padding: 5rem 1.5rem 0;
                        background: linear-gradient(135deg, var(--neutral-cream), var(--neutral-beige), var(--neutral-yellow));
                    }
                    .hero-glow {
                        position: absolute;
                        border-radius: 9999px;
                        filter: blur(64px);
                        opacity: 0.05;
                    }
                    .hero-glow.left {
                        top: 5rem;
                        left: 2.5rem;
                        width: 16rem;
                        height: 16rem;
                        background: var(--secondary);
                    }
                    .hero-glow.right {
                        bottom: 5rem;
                        right: 2.5rem;
                        width: 24rem;
                        height: 24rem;
                        background: var(--primary);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        text-align: center;
                    }
                    .hero-content h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        color: var(--primary);
                        margin-bottom: 1.5rem;
                    }
                    .hero-quote {
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        font-style: italic;
                        line-height: 1.6;
                        color: var(--primary-dark);
                        margin-bottom: 2rem;
                    }
                    .hero-divider {
                        width: 6rem;
                        height: 0.25rem;
                        margin: 0 auto 2.5rem;
                        background: linear-gradient(to right, var(--secondary), var(--accent-lime));
                    }
                    .hero-ctas {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-scroll {
                        margin-top: 4rem;
                        color: var(--secondary);
                    }
                    .hero-scroll svg {
                        width: 1.5rem;
                        height: 1.5rem;
                        animation: hero-bounce 1s infinite;
                    }
                    @keyframes hero-bounce {
                        0%, 100% { transform: translateY(-25%); }
                        50% { transform: translateY(0); }
                    }
                "#}
            </style>
            <div class="hero-glow left"></div>
            <div class="hero-glow right"></div>

            <div class="hero-content">
                <h1 ref={reveal.node(0)} class={reveal.class(0)}>{config::BRAND_NAME}</h1>
                <p ref={reveal.node(1)} class={classes!(reveal.class(1), "hero-quote")}>
                    {"\"Así como una planta necesita raíces sanas para florecer, las personas necesitamos mirar hacia adentro para transformar nuestra forma de ser, liderar y vincularnos.\""}
                </p>
                <div ref={reveal.node(2)} class={classes!(reveal.class(2), "hero-divider")}></div>
                <div ref={reveal.node(3)} class={classes!(reveal.class(3), "hero-ctas")}>
                    <Button href={config::WHATSAPP_BOOKING_LINK} external=true>
                        {"Agenda una sesión gratuita de 15 min"}
                    </Button>
                    <Button variant={ButtonVariant::Secondary} href={SectionId::About.href()} onclick={to_about}>
                        {"Conoce más sobre mí"}
                    </Button>
                </div>
                <div ref={reveal.node(4)} class={classes!(reveal.class(4), "hero-scroll")}>
                    <svg fill="none" stroke-linecap="round" stroke-linejoin="round" stroke-width="2" viewBox="0 0 24 24" stroke="currentColor">
                        <path d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                    </svg>
                </div>
            </div>
        </section>
    }
}
