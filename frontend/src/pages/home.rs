use yew::prelude::*;

use crate::components::footer::Footer;
use crate::pages::{
    about::About, contact::Contact, hero::Hero, services::Services,
    what_is_coaching::WhatIsCoaching,
};

/// The whole single-page site, sections in navigation order.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="site">
            <style>
                {r#"
                    :root {
                        --primary: #5a7458;
                        --primary-dark: #465c45;
                        --primary-deeper: #34463a;
                        --secondary: #7a9477;
                        --secondary-light: #c9dbc5;
                        --secondary-text: #6b7f69;
                        --accent-lime: #a8c256;
                        --neutral-cream: #fefcea;
                        --neutral-beige: #f5f0e1;
                        --neutral-yellow: #fbf6d9;
                        --neutral-gray: #f3f4f6;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: 'Inter', system-ui, sans-serif;
                        color: #1f2937;
                    }
                    .container-custom {
                        max-width: 1280px;
                        margin: 0 auto;
                    }
                    .section-padding {
                        padding: 5rem 1.5rem;
                    }
                    .section-title {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        color: var(--primary);
                        margin-bottom: 1rem;
                    }
                    .section-subtitle {
                        font-size: 1.75rem;
                        font-weight: 700;
                        color: var(--primary);
                    }
                    .section-divider {
                        width: 6rem;
                        height: 0.25rem;
                        margin: 0 auto 1.5rem;
                        background: linear-gradient(to right, var(--secondary), var(--accent-lime));
                    }
                    .card {
                        background: #ffffff;
                        border-radius: 1rem;
                        padding: 2rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .card:hover {
                        transform: scale(1.03);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.12);
                    }
                    .btn {
                        display: inline-block;
                        padding: 0.75rem 2rem;
                        border-radius: 0.5rem;
                        font-weight: 600;
                        font-size: 1rem;
                        text-decoration: none;
                        cursor: pointer;
                        border: 2px solid transparent;
                        transition: all 0.3s ease;
                    }
                    .btn:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .btn-primary {
                        color: #ffffff;
                        background: linear-gradient(to right, var(--secondary), var(--accent-lime));
                    }
                    .btn-primary:hover {
                        box-shadow: 0 10px 15px rgba(90, 116, 88, 0.3);
                        transform: translateY(-2px);
                    }
                    .btn-secondary {
                        color: var(--primary);
                        background: #ffffff;
                        border-color: var(--secondary);
                    }
                    .btn-secondary:hover {
                        background: var(--secondary-light);
                    }
                    .btn-outline {
                        color: var(--secondary);
                        background: transparent;
                        border-color: var(--secondary);
                    }
                    .fade-in-section {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .fade-in-section.is-visible {
                        opacity: 1;
                        transform: none;
                    }
                    @keyframes footer-bounce-in {
                        0% { opacity: 0; transform: translateY(40px); }
                        60% { opacity: 1; transform: translateY(-8px); }
                        100% { opacity: 1; transform: translateY(0); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .fade-in-section {
                            transition: none;
                        }
                    }
                "#}
            </style>
            <main>
                <Hero />
                <About />
                <Services />
                <WhatIsCoaching />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
