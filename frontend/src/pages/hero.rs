use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal, RevealMode, RevealTrigger};

const TRUSTED_SCHOOLS: &[(&str, &str)] = &[
    ("Despertares", "https://i.ibb.co/xtvJMd4v/5.png"),
    ("Trilce", "https://www.trilcelm.edu.pe/trujillo/images/LOGO-TRILCE-FONDO-BLANCO--01.png"),
    ("Fleming", "https://i.ibb.co/PGDTMwSg/4.png"),
    ("Max Planck", "https://mlp.edu.pe/wp-content/uploads/2023/06/LOGO-Y-ESCUDO-COLEGIO-MAX-PLANCK-1.jpeg"),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealTrigger::SECTION, RevealMode::Once);

    html! {
        <section id="hero" ref={section} class={reveal_class("hero", revealed)}>
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 8rem 1.5rem 6rem;
                        background: #fff;
                    }
                    .hero-main {
                        display: flex;
                        gap: 3rem;
                        align-items: center;
                        max-width: 1280px;
                        width: 100%;
                    }
                    .hero-image img {
                        max-width: 36rem;
                        width: 100%;
                        border-radius: 1rem;
                        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.15);
                    }
                    .hero-copy h1 {
                        font-size: 3.5rem;
                        font-weight: 800;
                        line-height: 1.1;
                        color: #111827;
                        margin-bottom: 1.5rem;
                    }
                    .hero-copy h1 span { color: #2563eb; }
                    .hero-subtitle { font-size: 1.4rem; color: #4b5563; margin-bottom: 1rem; }
                    .hero-quote { font-style: italic; color: #6b7280; margin-bottom: 1.5rem; }
                    .hero-actions { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }
                    .hero-cta {
                        background: #2563eb;
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border-radius: 0.75rem;
                        font-weight: 500;
                        text-decoration: none;
                        transition: background 0.3s ease;
                    }
                    .hero-cta:hover { background: #1d4ed8; }
                    .hero-how { color: #2563eb; padding: 0.75rem 1.5rem; text-decoration: none; }
                    .hero-how:hover { text-decoration: underline; }
                    .trusted { margin-top: 4rem; width: 100%; text-align: center; }
                    .trusted p {
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-size: 0.85rem;
                        color: #9ca3af;
                    }
                    .trusted-logos {
                        margin-top: 2.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem 6rem;
                    }
                    .trusted-logos img {
                        height: 3.5rem;
                        opacity: 0.6;
                        filter: grayscale(1);
                        transition: all 0.3s ease;
                    }
                    .trusted-logos img:hover { opacity: 1; filter: none; transform: scale(1.05); }
                    @media (max-width: 768px) {
                        .hero-main { flex-direction: column; text-align: center; }
                        .hero-copy h1 { font-size: 2.6rem; }
                        .hero-actions { justify-content: center; }
                    }
                "#}
            </style>
            <div class="hero-main">
                <div class="hero-image reveal-item zoom">
                    <img src="/assets/hero.png" alt="RutaKids plataforma" />
                </div>
                <div class="hero-copy">
                    <h1 class="reveal-item from-below">
                        {"Seguridad y tranquilidad en cada "}<span>{"ruta escolar"}</span>
                    </h1>
                    <p class="hero-subtitle reveal-item from-below" style={stagger_style(1, 0.2, 0.0)}>
                        {"Monitorea en tiempo real el transporte de tus alumnos y mantén informadas a las familias en todo momento."}
                    </p>
                    <p class="hero-quote reveal-item from-below" style={stagger_style(2, 0.2, 0.0)}>
                        {"\"Porque cada niño merece llegar seguro y cada padre merece saberlo.\""}
                    </p>
                    <div class="hero-actions reveal-item from-below" style={stagger_style(3, 0.2, 0.0)}>
                        <a href="#contactanos" class="hero-cta">{"Solicita una demo"}</a>
                        <a href="#about-the-product" class="hero-how">{"¿Cómo funciona?"}</a>
                    </div>
                </div>
            </div>
            <div class="trusted reveal-item from-below" style={stagger_style(1, 0.2, 0.0)}>
                <p>{"Confían en nosotros"}</p>
                <div class="trusted-logos">
                    { for TRUSTED_SCHOOLS.iter().map(|(name, logo)| html! {
                        <img src={*logo} alt={*name} loading="lazy" />
                    }) }
                </div>
            </div>
        </section>
    }
}
