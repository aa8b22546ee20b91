use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal, RevealMode, RevealTrigger};
use crate::contact::error::{ContactError, Field, SUCCESS_NOTICE};
use crate::contact::form::{ContactForm, Position};
use crate::contact::relay::{submit_inquiry, EmailJs};
use crate::location::picker::{map_embed_url, Country};
use crate::location::reference::ReferenceData;

#[derive(Clone, PartialEq)]
enum Notice {
    Sent,
    Failed(ContactError),
}

impl Notice {
    fn invalid_field(&self) -> Option<Field> {
        match self {
            Notice::Failed(ContactError::Invalid(field)) => Some(*field),
            _ => None,
        }
    }
}

fn edit(form: &UseStateHandle<ContactForm>, apply: impl FnOnce(&mut ContactForm)) {
    let mut next = (**form).clone();
    apply(&mut next);
    form.set(next);
}

fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealTrigger::SECTION, RevealMode::Reversible);
    let form = use_state(ContactForm::default);
    let notice = use_state(|| None::<Notice>);
    let submitting = use_state(|| false);
    let data = ReferenceData::peru();

    let on_school = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            edit(&form, |f| f.school = value);
        })
    };
    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            edit(&form, |f| f.name = value);
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            edit(&form, |f| f.email = value);
        })
    };
    let on_vehicles = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            edit(&form, |f| f.vehicles = value);
        })
    };
    let on_position = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let position = Position::from_label(&select_value(&e));
            edit(&form, |f| f.position = position);
        })
    };
    let on_country = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let country = Country::from_label(&select_value(&e));
            edit(&form, |f| f.location.set_country(country));
        })
    };
    let on_region = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            edit(&form, |f| f.location.set_region(value));
        })
    };
    let on_sub_region = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            edit(&form, |f| f.location.set_sub_region(value));
        })
    };
    let on_district = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let value = select_value(&e);
            edit(&form, |f| f.location.set_district(value));
        })
    };
    let on_address = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            edit(&form, |f| f.location.set_address(value));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let form = form.clone();
            let notice = notice.clone();
            let submitting = submitting.clone();
            submitting.set(true);
            notice.set(None);
            spawn_local(async move {
                let relay = EmailJs::from_config();
                match submit_inquiry(&relay, &form, ReferenceData::peru()).await {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        notice.set(Some(Notice::Sent));
                    }
                    Err(err) => {
                        log::error!("Contact form not sent: {}", err);
                        notice.set(Some(Notice::Failed(err)));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let invalid = (*notice).as_ref().and_then(Notice::invalid_field);
    let field_class = |field: Field| classes!("field", (invalid == Some(field)).then_some("invalid"));
    let location = &form.location;
    let map_src = map_embed_url(location, data);

    html! {
        <section id="contactanos" ref={section} class={reveal_class("contact-section", revealed)}>
            <style>
                {r#"
                    .contact-section {
                        padding: 6rem 1.5rem;
                        background: linear-gradient(180deg, #eff6ff 0%, #ffffff 100%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .contact-section h2 { font-size: 2.5rem; font-weight: 800; color: #111827; text-align: center; }
                    .contact-section .lead { color: #4b5563; font-size: 1.15rem; text-align: center; margin: 0.75rem 0 3rem; }
                    .contact-inner { display: flex; gap: 3rem; width: 100%; max-width: 1200px; align-items: stretch; }
                    .contact-form {
                        width: 55%;
                        background: #fff;
                        border-radius: 1.25rem;
                        padding: 2.5rem;
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.12);
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.25rem;
                    }
                    .contact-form .field { display: flex; flex-direction: column; gap: 0.4rem; }
                    .contact-form .field.wide { grid-column: span 2; }
                    .contact-form label { font-size: 0.9rem; font-weight: 600; color: #374151; }
                    .contact-form input, .contact-form select {
                        padding: 0.75rem 1rem;
                        border-radius: 0.6rem;
                        border: 1px solid #d1d5db;
                        font-size: 1rem;
                        transition: border-color 0.2s ease, box-shadow 0.2s ease;
                    }
                    .contact-form input:focus, .contact-form select:focus {
                        outline: none;
                        border-color: #3b82f6;
                        box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.2);
                    }
                    .contact-form select:disabled { background: #f3f4f6; cursor: not-allowed; }
                    .contact-form .field.invalid input, .contact-form .field.invalid select { border-color: #dc2626; }
                    .contact-form button[type="submit"] {
                        grid-column: span 2;
                        padding: 1rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 1.1rem;
                        font-weight: 700;
                        color: #fff;
                        background: linear-gradient(90deg, #2563eb, #3b82f6);
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease, opacity 0.2s ease;
                    }
                    .contact-form button[type="submit"]:hover { transform: translateY(-2px); box-shadow: 0 10px 25px rgba(37, 99, 235, 0.35); }
                    .contact-form button[type="submit"]:disabled { opacity: 0.6; cursor: wait; }
                    .contact-notice { grid-column: span 2; padding: 0.9rem 1rem; border-radius: 0.6rem; font-weight: 500; }
                    .contact-notice.sent { background: #dcfce7; color: #166534; }
                    .contact-notice.failed { background: #fee2e2; color: #991b1b; }
                    .contact-map {
                        width: 45%;
                        min-height: 420px;
                        border-radius: 1.25rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.12);
                    }
                    .contact-map iframe { width: 100%; height: 100%; border: 0; }
                    @media (max-width: 900px) {
                        .contact-inner { flex-direction: column; }
                        .contact-form, .contact-map { width: 100%; }
                        .contact-form { grid-template-columns: 1fr; padding: 1.5rem; }
                        .contact-form .field.wide, .contact-form button[type="submit"], .contact-notice { grid-column: span 1; }
                    }
                "#}
            </style>
            <h2 class="reveal-item from-below">{"Contáctanos"}</h2>
            <p class="lead reveal-item from-below" style={stagger_style(1, 0.2, 0.0)}>
                {"Cuéntanos sobre tu colegio y te mostraremos cómo RutaKids puede ayudarte."}
            </p>
            <div class="contact-inner">
                <form class="contact-form reveal-item from-left" style={stagger_style(2, 0.2, 0.0)} {onsubmit} novalidate={true}>
                    <div class={field_class(Field::School)}>
                        <label for="school">{"Colegio"}</label>
                        <input id="school" type="text" placeholder="Nombre del colegio" value={form.school.clone()} oninput={on_school} />
                    </div>
                    <div class={field_class(Field::Name)}>
                        <label for="name">{"Nombre"}</label>
                        <input id="name" type="text" placeholder="Tu nombre" value={form.name.clone()} oninput={on_name} />
                    </div>
                    <div class={field_class(Field::Position)}>
                        <label for="position">{"Cargo"}</label>
                        <select id="position" onchange={on_position}>
                            <option value="" selected={form.position.is_none()}>{"Selecciona tu cargo"}</option>
                            { for Position::ALL.iter().map(|p| html! {
                                <option value={p.label()} selected={form.position == Some(*p)}>{p.label()}</option>
                            }) }
                        </select>
                    </div>
                    <div class={field_class(Field::Email)}>
                        <label for="email">{"Correo electrónico"}</label>
                        <input id="email" type="email" placeholder="correo@colegio.edu.pe" value={form.email.clone()} oninput={on_email} />
                    </div>
                    <div class={field_class(Field::Vehicles)}>
                        <label for="vehicles">{"Número de vehículos"}</label>
                        <input id="vehicles" type="number" min="0" placeholder="Ej. 5" value={form.vehicles.clone()} oninput={on_vehicles} />
                    </div>
                    <div class="field">
                        <label for="country">{"País"}</label>
                        <select id="country" onchange={on_country}>
                            <option value="" selected={location.country.is_none()}>{"Selecciona un país"}</option>
                            { for Country::ALL.iter().map(|c| html! {
                                <option value={c.label()} selected={location.country == Some(*c)}>{c.label()}</option>
                            }) }
                        </select>
                    </div>
                    if location.shows_regions() {
                        <div class="field">
                            <label for="region">{"Departamento"}</label>
                            <select id="region" onchange={on_region}>
                                <option value="" selected={location.region_id.is_none()}>{"Selecciona un departamento"}</option>
                                { for data.regions.iter().map(|r| html! {
                                    <option value={r.id.clone()} selected={location.region_id.as_deref() == Some(r.id.as_str())}>{r.name.clone()}</option>
                                }) }
                            </select>
                        </div>
                        <div class="field">
                            <label for="sub-region">{"Provincia"}</label>
                            <select id="sub-region" onchange={on_sub_region} disabled={location.region_id.is_none()}>
                                <option value="" selected={location.sub_region_id.is_none()}>{"Selecciona una provincia"}</option>
                                { for location.sub_region_options(data).into_iter().map(|p| html! {
                                    <option value={p.id.clone()} selected={location.sub_region_id.as_deref() == Some(p.id.as_str())}>{p.name.clone()}</option>
                                }) }
                            </select>
                        </div>
                        <div class="field">
                            <label for="district">{"Distrito"}</label>
                            <select id="district" onchange={on_district} disabled={location.sub_region_id.is_none()}>
                                <option value="" selected={location.district_name.is_none()}>{"Selecciona un distrito"}</option>
                                { for location.district_options(data).into_iter().map(|d| html! {
                                    <option value={d.name.clone()} selected={location.district_name.as_deref() == Some(d.name.as_str())}>{d.name.clone()}</option>
                                }) }
                            </select>
                        </div>
                        <div class="field">
                            <label for="address">{"Dirección"}</label>
                            <input id="address" type="text" placeholder="Av. / Calle y número" value={location.address.clone()} oninput={on_address} />
                        </div>
                    }
                    if let Some(current) = (*notice).clone() {
                        <div class={classes!("contact-notice", match current { Notice::Sent => "sent", Notice::Failed(_) => "failed" })}>
                            { match &current {
                                Notice::Sent => SUCCESS_NOTICE,
                                Notice::Failed(err) => err.user_message(),
                            } }
                        </div>
                    }
                    <button type="submit" disabled={*submitting}>
                        { if *submitting { "Enviando..." } else { "Solicitar demo" } }
                    </button>
                </form>
                <div class="contact-map reveal-item from-right" style={stagger_style(2, 0.2, 0.2)}>
                    <iframe src={map_src} title="Ubicación" loading="lazy" referrerpolicy="no-referrer-when-downgrade"></iframe>
                </div>
            </div>
        </section>
    }
}
