use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal, RevealMode, RevealTrigger};

struct Reason {
    icon: &'static str,
    title: &'static str,
    bullets: &'static [&'static str],
}

const REASONS: &[Reason] = &[
    Reason {
        icon: "🚌",
        title: "Transporte bajo control",
        bullets: &[
            "Ubicación de cada unidad en tiempo real",
            "Historial de recorridos y paradas",
            "Alertas ante desvíos o demoras",
        ],
    },
    Reason {
        icon: "📱",
        title: "Familias informadas",
        bullets: &[
            "Aviso cuando el bus se acerca a casa",
            "Confirmación de subida y bajada del alumno",
            "Comunicación directa con el colegio",
        ],
    },
    Reason {
        icon: "👩‍🏫",
        title: "Gestión simple para el colegio",
        bullets: &[
            "Panel web para coordinadores",
            "Reportes descargables por ruta",
            "Implementación acompañada por nuestro equipo",
        ],
    },
];

#[function_component(WhyRutaKids)]
pub fn why_rutakids() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealTrigger::SECTION, RevealMode::Reversible);

    html! {
        <section id="por-que-rutakids" ref={section} class={reveal_class("why-section", revealed)}>
            <style>
                {r#"
                    .why-section {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(135deg, #eff6ff 0%, #ffffff 60%);
                        text-align: center;
                    }
                    .why-label {
                        color: #2563eb;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        font-size: 0.9rem;
                    }
                    .why-section h2 { font-size: 2.5rem; font-weight: 800; color: #111827; margin: 0.5rem 0 3rem; }
                    .why-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .why-card {
                        background: #fff;
                        border-radius: 1rem;
                        padding: 2rem;
                        text-align: left;
                        box-shadow: 0 10px 30px rgba(37, 99, 235, 0.08);
                    }
                    .why-card:hover {
                        transform: translateY(-8px) scale(1.02);
                        box-shadow: 0 20px 40px rgba(37, 99, 235, 0.18);
                    }
                    .why-card .icon-container {
                        font-size: 2rem;
                        background: #dbeafe;
                        border-radius: 9999px;
                        width: fit-content;
                        padding: 1rem;
                        margin-bottom: 1rem;
                        transition: transform 0.4s ease;
                    }
                    .why-card:hover .icon-container { transform: rotate(360deg) scale(1.1); }
                    .why-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
                    .why-card li { color: #4b5563; margin-bottom: 0.4rem; transition: transform 0.3s ease; }
                    .why-card:hover li { transform: translateX(6px); }
                "#}
            </style>
            <p class="why-label reveal-item from-below">{"¿Por qué RutaKids?"}</p>
            <h2 class="reveal-item from-below" style={stagger_style(1, 0.2, 0.0)}>
                {"Todo lo que tu colegio necesita para un transporte seguro"}
            </h2>
            <div class="why-grid">
                { for REASONS.iter().enumerate().map(|(i, reason)| html! {
                    <div class="why-card reveal-item from-below" style={stagger_style(i, 0.2, 0.4)}>
                        <div class="icon-container">{reason.icon}</div>
                        <h3>{reason.title}</h3>
                        <ul>
                            { for reason.bullets.iter().map(|b| html! { <li>{"✔ "}{*b}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}
