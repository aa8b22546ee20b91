use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal, RevealMode, RevealTrigger};
use crate::config;

#[function_component(AboutTheProduct)]
pub fn about_the_product() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealTrigger::SECTION, RevealMode::Reversible);
    let video_src = format!(
        "https://www.youtube.com/embed/{id}?autoplay=1&mute=1&controls=1&loop=1&playlist={id}",
        id = config::PRODUCT_VIDEO_ID
    );

    html! {
        <section id="about-the-product" ref={section} class={reveal_class("product-section", revealed)}>
            <style>
                {r#"
                    .product-section {
                        padding: 6rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        background: #fff;
                    }
                    .product-section h2 {
                        font-size: 2.5rem;
                        font-weight: 800;
                        text-align: center;
                        color: #111827;
                        max-width: 48rem;
                        margin-bottom: 3rem;
                    }
                    .product-section h2 span { color: #2563eb; }
                    .product-video {
                        width: 100%;
                        max-width: 960px;
                        aspect-ratio: 16 / 9;
                        border-radius: 1.25rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
                        transition: transform 0.5s ease, box-shadow 0.5s ease;
                    }
                    .product-video:hover {
                        transform: scale(1.02);
                        box-shadow: 0 30px 60px rgba(37, 99, 235, 0.3);
                    }
                    .product-video iframe { width: 100%; height: 100%; border: 0; }
                    .product-quote {
                        margin-top: 2.5rem;
                        font-size: 1.25rem;
                        font-style: italic;
                        color: #4b5563;
                        text-align: center;
                        max-width: 42rem;
                    }
                "#}
            </style>
            <h2 class="reveal-item from-below">
                {"Conoce "}<span>{"RutaKids"}</span>{" en acción"}
            </h2>
            <div class="product-video reveal-item zoom" style={stagger_style(1, 0.3, 0.0)}>
                <iframe
                    src={video_src}
                    title="Video RutaKids"
                    allow="autoplay; encrypted-media"
                    allowfullscreen={true}
                    loading="lazy"
                ></iframe>
            </div>
            <p class="product-quote reveal-item from-below" style={stagger_style(2, 0.3, 0.0)}>
                {"\"Una sola plataforma para colegios, conductores y familias.\""}
            </p>
        </section>
    }
}
