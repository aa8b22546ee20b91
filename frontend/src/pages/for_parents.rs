use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal, RevealMode, RevealTrigger};

const FEATURES: &[(&str, &str, &str)] = &[
    ("🔔", "Alertas de llegada", "Recibe un aviso cuando el bus está a pocos minutos de tu casa."),
    ("🗺️", "Mapa en vivo", "Sigue el recorrido de la unidad desde tu celular."),
    ("✅", "Subida y bajada confirmadas", "Sabrás exactamente cuándo tu hijo sube y baja del bus."),
    ("⏰", "Horarios estimados", "Planifica tu día con tiempos de llegada actualizados."),
];

const APP_STORE_BADGE: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3c/Download_on_the_App_Store_Badge.svg/203px-Download_on_the_App_Store_Badge.svg.png";
const PLAY_STORE_BADGE: &str = "https://upload.wikimedia.org/wikipedia/commons/7/78/Google_Play_Store_badge_EN.svg";

#[function_component(ForParents)]
pub fn for_parents() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealTrigger::SECTION, RevealMode::Reversible);

    html! {
        <section id="para-padres" ref={section} class={reveal_class("parents-section", revealed)}>
            <style>
                {r#"
                    .parents-section {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(180deg, #ffffff 0%, #eff6ff 100%);
                        display: flex;
                        justify-content: center;
                    }
                    .parents-inner {
                        display: flex;
                        gap: 4rem;
                        align-items: center;
                        max-width: 1200px;
                        width: 100%;
                    }
                    .parents-mockups { position: relative; display: flex; gap: 1rem; justify-content: center; width: 45%; }
                    .parents-mockups img {
                        width: 12rem;
                        border-radius: 1.5rem;
                        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.2);
                        transition: transform 0.5s ease;
                    }
                    .parents-mockups img.android { margin-top: 3rem; }
                    .parents-mockups img:hover { transform: translateY(-10px) rotate(-2deg); }
                    .parents-copy { width: 55%; }
                    .parents-copy h2 { font-size: 2.5rem; font-weight: 800; color: #111827; }
                    .parents-copy .subtitle { color: #4b5563; font-size: 1.15rem; margin: 1rem 0 2rem; }
                    .parents-feature { display: flex; gap: 1rem; margin-bottom: 1.25rem; }
                    .parents-feature .icon { font-size: 1.5rem; margin-top: 0.2rem; }
                    .parents-feature h4 { font-weight: 600; color: #1f2937; margin-bottom: 0.25rem; }
                    .parents-feature p { color: #4b5563; font-size: 0.95rem; }
                    .parents-quote { font-style: italic; color: #2563eb; margin: 2rem 0; }
                    .stores { display: flex; gap: 1rem; align-items: center; }
                    .stores img { height: 3rem; transition: transform 0.3s ease; }
                    .stores img:hover { transform: scale(1.08); }
                    @media (max-width: 768px) {
                        .parents-inner { flex-direction: column; }
                        .parents-mockups, .parents-copy { width: 100%; }
                    }
                "#}
            </style>
            <div class="parents-inner">
                <div class="parents-mockups reveal-item from-left">
                    <img class="ios" src="/assets/mockup-ios.png" alt="App RutaKids en iOS" loading="lazy" />
                    <img class="android" src="/assets/mockup-android.png" alt="App RutaKids en Android" loading="lazy" />
                </div>
                <div class="parents-copy">
                    <h2 class="reveal-item from-below">{"Para padres de familia"}</h2>
                    <p class="subtitle reveal-item from-below" style={stagger_style(1, 0.2, 0.0)}>
                        {"Tranquilidad en la palma de tu mano: sabe dónde está tu hijo durante todo el trayecto."}
                    </p>
                    { for FEATURES.iter().enumerate().map(|(i, (icon, title, text))| html! {
                        <div class="parents-feature reveal-item from-right" style={stagger_style(i, 0.1, 0.6)}>
                            <div class="icon">{*icon}</div>
                            <div>
                                <h4>{*title}</h4>
                                <p>{*text}</p>
                            </div>
                        </div>
                    }) }
                    <p class="parents-quote reveal-item from-below" style={stagger_style(0, 0.0, 1.0)}>
                        {"\"Ya no tengo que esperar en la puerta sin saber cuándo llega el bus.\""}
                    </p>
                    <div class="stores reveal-item from-below" style={stagger_style(0, 0.0, 1.2)}>
                        <img src={APP_STORE_BADGE} alt="Descargar en App Store" />
                        <img src={PLAY_STORE_BADGE} alt="Disponible en Google Play" />
                    </div>
                </div>
            </div>
        </section>
    }
}
