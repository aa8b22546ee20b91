use chrono::{Datelike, Local};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal, RevealMode, RevealTrigger};

const WHATSAPP_URL: &str = "https://wa.me/51989028007";
const CONTACT_EMAIL: &str = "llantatech.pe@gmail.com";
const OFFICE_ADDRESS: &str = "Prolongación Primavera 2390, Santiago de Surco, Lima";

const SOCIAL: &[(&str, &str)] = &[
    ("Facebook", "https://www.facebook.com/rutakids"),
    ("Instagram", "https://www.instagram.com/rutakids"),
    ("LinkedIn", "https://www.linkedin.com/company/llantatech"),
    ("TikTok", "https://www.tiktok.com/@rutakids"),
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} RutaKids · Un producto de LlantaTech. Todos los derechos reservados.", year)
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), RevealTrigger::FOOTER, RevealMode::Reversible);
    let back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer ref={node} class={reveal_class("site-footer", revealed)}>
            <style>
                {r#"
                    .site-footer {
                        background: #0f172a;
                        color: #cbd5e1;
                        padding: 4rem 1.5rem 2rem;
                    }
                    .footer-grid {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 2.5rem;
                    }
                    .footer-brand { font-size: 1.75rem; font-weight: 800; letter-spacing: 0.08em; color: #fff; }
                    .footer-brand span { color: #3b82f6; }
                    .footer-tagline { margin-top: 0.75rem; max-width: 22rem; line-height: 1.6; }
                    .site-footer h4 { color: #fff; font-weight: 700; margin-bottom: 1rem; }
                    .site-footer ul { list-style: none; padding: 0; margin: 0; }
                    .site-footer li { margin-bottom: 0.6rem; }
                    .site-footer a { color: #cbd5e1; text-decoration: none; transition: color 0.2s ease; }
                    .site-footer a:hover { color: #60a5fa; }
                    .footer-bottom {
                        max-width: 1200px;
                        margin: 3rem auto 0;
                        padding-top: 1.5rem;
                        border-top: 1px solid #1e293b;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        font-size: 0.9rem;
                    }
                    .back-to-top {
                        border: 1px solid #334155;
                        background: transparent;
                        color: #cbd5e1;
                        border-radius: 9999px;
                        padding: 0.5rem 1.25rem;
                        cursor: pointer;
                        transition: background 0.2s ease, color 0.2s ease, transform 0.2s ease;
                    }
                    .back-to-top:hover { background: #2563eb; color: #fff; transform: translateY(-3px); }
                    @media (max-width: 900px) {
                        .footer-grid { grid-template-columns: 1fr 1fr; }
                    }
                    @media (max-width: 600px) {
                        .footer-grid { grid-template-columns: 1fr; }
                        .footer-bottom { flex-direction: column; gap: 1rem; text-align: center; }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div class="reveal-item from-below">
                    <div class="footer-brand">{"RUTA"}<span>{"KIDS"}</span></div>
                    <p class="footer-tagline">
                        {"Transporte escolar seguro y transparente para colegios y familias."}
                    </p>
                </div>
                <div class="reveal-item from-below" style={stagger_style(1, 0.15, 0.0)}>
                    <h4>{"Contacto"}</h4>
                    <ul>
                        <li><a href={WHATSAPP_URL} target="_blank" rel="noopener noreferrer">{"WhatsApp: +51 989 028 007"}</a></li>
                        <li><a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a></li>
                        <li>{"Lun - Vie: 9:00 a 18:00"}</li>
                    </ul>
                </div>
                <div class="reveal-item from-below" style={stagger_style(2, 0.15, 0.0)}>
                    <h4>{"Ubicación"}</h4>
                    <p>{OFFICE_ADDRESS}</p>
                </div>
                <div class="reveal-item from-below" style={stagger_style(3, 0.15, 0.0)}>
                    <h4>{"Síguenos"}</h4>
                    <ul>
                        { for SOCIAL.iter().map(|(label, url)| html! {
                            <li><a href={*url} target="_blank" rel="noopener noreferrer">{*label}</a></li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom reveal-item from-below" style={stagger_style(4, 0.15, 0.0)}>
                <span>{copyright_line(Local::now().year())}</span>
                <button class="back-to-top" onclick={back_to_top}>{"↑ Volver arriba"}</button>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        let line = copyright_line(2025);
        assert!(line.starts_with("© 2025 RutaKids"));
        assert!(line.contains("LlantaTech"));
    }
}
