use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal, RevealMode, RevealTrigger};

const FEATURES: &[(&str, &str, &str)] = &[
    ("📈", "Indicadores de puntualidad", "Mide tiempos de recorrido y detecta rutas con retrasos frecuentes."),
    ("🛣️", "Gestión de rutas", "Asigna conductores, unidades y paradas desde un solo panel."),
    ("⚠️", "Incidencias al instante", "Recibe alertas ante desvíos, paradas no programadas o emergencias."),
    ("⬇️", "Reportes exportables", "Descarga el historial de cada ruta para auditorías y reuniones."),
];

#[function_component(ForSchool)]
pub fn for_school() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealTrigger::SECTION, RevealMode::Reversible);

    html! {
        <section id="para-colegios" ref={section} class={reveal_class("school-section", revealed)}>
            <style>
                {r#"
                    .school-section { padding: 6rem 1.5rem; background: #fff; display: flex; justify-content: center; }
                    .school-inner { display: flex; gap: 4rem; align-items: center; max-width: 1200px; width: 100%; }
                    .school-copy { width: 50%; }
                    .school-copy h2 { font-size: 2.5rem; font-weight: 800; color: #111827; }
                    .school-copy .description { color: #4b5563; font-size: 1.15rem; margin: 1rem 0 2rem; }
                    .school-feature {
                        display: flex;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .school-feature:hover { background: #eff6ff; transform: translateX(8px); }
                    .school-feature .feature-icon { font-size: 1.4rem; transition: transform 0.3s ease; }
                    .school-feature:hover .feature-icon { transform: scale(1.2) rotate(8deg); }
                    .school-feature h4 { font-weight: 600; color: #1f2937; }
                    .school-feature p { color: #4b5563; font-size: 0.95rem; }
                    .school-image { width: 50%; }
                    .school-image img { width: 100%; border-radius: 1rem; box-shadow: 0 25px 50px rgba(15, 23, 42, 0.2); }
                    @media (max-width: 768px) {
                        .school-inner { flex-direction: column-reverse; }
                        .school-copy, .school-image { width: 100%; }
                    }
                "#}
            </style>
            <div class="school-inner">
                <div class="school-copy">
                    <h2 class="reveal-item from-below">{"Para colegios"}</h2>
                    <p class="description reveal-item from-below" style={stagger_style(1, 0.2, 0.0)}>
                        {"Un panel web pensado para coordinadores y directores: visibilidad total del transporte escolar sin complicaciones."}
                    </p>
                    { for FEATURES.iter().enumerate().map(|(i, (icon, title, text))| html! {
                        <div class="school-feature reveal-item from-left" style={stagger_style(i, 0.15, 0.5)}>
                            <div class="feature-icon">{*icon}</div>
                            <div>
                                <h4>{*title}</h4>
                                <p>{*text}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="school-image reveal-item from-right" style={stagger_style(0, 0.0, 0.3)}>
                    <img src="/assets/web-dashboard.png" alt="Panel web RutaKids" loading="lazy" />
                </div>
            </div>
        </section>
    }
}
