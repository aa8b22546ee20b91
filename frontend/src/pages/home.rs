use yew::prelude::*;

use crate::components::footer::Footer;
use crate::pages::{
    about_product::AboutTheProduct,
    about_us::AboutUs,
    contact::Contact,
    for_parents::ForParents,
    for_school::ForSchool,
    hero::Hero,
    how_it_works::HowItWorks,
    why::WhyRutaKids,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        font-family: 'Inter', 'Segoe UI', sans-serif;
                        color: #111827;
                        background: #fff;
                    }
                    section[id] { scroll-margin-top: 5rem; }
                    .reveal-item {
                        opacity: 0;
                        transition: opacity 0.8s ease, transform 0.8s cubic-bezier(0.22, 1, 0.36, 1), filter 0.8s ease;
                    }
                    .reveal-item.from-below { transform: translateY(40px); }
                    .reveal-item.from-left { transform: translateX(-60px); }
                    .reveal-item.from-right { transform: translateX(60px); }
                    .reveal-item.zoom { transform: scale(0.85); filter: blur(4px); }
                    .revealed .reveal-item {
                        opacity: 1;
                        transform: none;
                        filter: none;
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .reveal-item { transition: none; opacity: 1; transform: none; filter: none; }
                    }
                "#}
            </style>
            <Hero />
            <WhyRutaKids />
            <AboutTheProduct />
            <HowItWorks />
            <ForParents />
            <ForSchool />
            <AboutUs />
            <Contact />
            <Footer />
        </div>
    }
}
