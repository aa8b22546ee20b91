use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::use_interval;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal, RevealMode, RevealTrigger};

const STEP_INTERVAL_MS: u32 = 7000;

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        icon: "🧑‍✈️",
        title: "El conductor inicia la ruta",
        description: "Desde la app, el conductor marca el inicio del recorrido y RutaKids empieza a compartir la ubicación de la unidad.",
        image: "/assets/steps/driver.gif",
    },
    Step {
        icon: "🗺️",
        title: "Seguimiento en tiempo real",
        description: "El colegio y las familias ven el bus en el mapa y el tiempo estimado de llegada a cada parada.",
        image: "/assets/steps/map.gif",
    },
    Step {
        icon: "🔔",
        title: "Notificaciones oportunas",
        description: "Los padres reciben un aviso cuando el bus se acerca y cuando su hijo sube o baja de la unidad.",
        image: "/assets/steps/notifications.gif",
    },
    Step {
        icon: "🏫",
        title: "Llegada confirmada al colegio",
        description: "El coordinador recibe la confirmación de llegada y el reporte completo del recorrido.",
        image: "/assets/steps/school.gif",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepCycle {
    pub active: usize,
    pub len: usize,
}

pub enum StepAction {
    Advance,
    Select(usize),
}

impl Reducible for StepCycle {
    type Action = StepAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let active = match action {
            StepAction::Advance if self.len > 0 => (self.active + 1) % self.len,
            StepAction::Advance => self.active,
            StepAction::Select(idx) if idx < self.len => idx,
            StepAction::Select(_) => self.active,
        };
        Rc::new(StepCycle { active, len: self.len })
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealTrigger::SECTION, RevealMode::Reversible);
    let cycle = use_reducer(|| StepCycle { active: 0, len: STEPS.len() });

    {
        let cycle = cycle.clone();
        use_interval(move || cycle.dispatch(StepAction::Advance), STEP_INTERVAL_MS);
    }

    let step = &STEPS[cycle.active];

    html! {
        <section id="como-funciona" ref={section} class={reveal_class("how-section", revealed)}>
            <style>
                {r#"
                    .how-section {
                        min-height: 100vh;
                        padding: 6rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #fff;
                    }
                    .how-section h2 { font-size: 3rem; font-weight: 800; text-align: center; color: #111827; }
                    .how-subtitle { font-size: 1.4rem; color: #4b5563; text-align: center; max-width: 42rem; margin: 0.5rem 0 3rem; }
                    .how-panel {
                        width: 100%;
                        max-width: 1280px;
                        padding: 3.5rem;
                        border-radius: 1.5rem;
                        background: rgba(255, 255, 255, 0.6);
                        backdrop-filter: blur(24px);
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.15);
                    }
                    .how-steps { display: flex; flex-wrap: wrap; justify-content: center; gap: 4rem; margin-bottom: 4rem; }
                    .how-step {
                        position: relative;
                        cursor: pointer;
                        opacity: 0.5;
                        transition: transform 0.5s ease, opacity 0.5s ease;
                        border: none;
                        background: none;
                    }
                    .how-step:hover { opacity: 1; }
                    .how-step.active { opacity: 1; transform: scale(1.3); z-index: 2; }
                    .how-step:active { transform: scale(1.1); }
                    .how-step-icon {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.2rem;
                        background: #dbeafe;
                        box-shadow: 0 0 14px 4px rgba(37, 99, 235, 0.3);
                    }
                    .how-step svg {
                        position: absolute;
                        top: -0.25rem;
                        left: -0.25rem;
                        width: 5.5rem;
                        height: 5.5rem;
                        transform: rotate(-90deg);
                    }
                    .circle-timer { animation: countdownCircle 7s linear forwards; }
                    @keyframes countdownCircle {
                        from { stroke-dashoffset: 0; }
                        to { stroke-dashoffset: 188; }
                    }
                    .how-body { display: flex; gap: 3.5rem; align-items: center; justify-content: space-between; }
                    .how-text, .how-visual { width: 50%; }
                    .how-counter { text-transform: uppercase; font-size: 0.85rem; color: #3b82f6; font-weight: 600; letter-spacing: 0.05em; }
                    .how-text h3 { font-size: 2.2rem; font-weight: 800; color: #111827; margin: 0.5rem 0 1rem; }
                    .how-text p { font-size: 1.2rem; color: #374151; line-height: 1.6; }
                    .how-text { animation: stepTextIn 0.6s ease-out; }
                    .how-visual img {
                        width: 100%;
                        max-width: 32rem;
                        height: 16rem;
                        object-fit: cover;
                        border-radius: 1rem;
                        background: #000;
                        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.2);
                        animation: stepVisualIn 0.8s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    @keyframes stepTextIn {
                        from { opacity: 0; transform: translateX(-30px); }
                        to { opacity: 1; transform: none; }
                    }
                    @keyframes stepVisualIn {
                        from { opacity: 0; transform: scale(0.9) rotate(2deg); }
                        to { opacity: 1; transform: none; }
                    }
                    @media (max-width: 768px) {
                        .how-panel { padding: 2.5rem 1rem; }
                        .how-steps { gap: 2rem; }
                        .how-body { flex-direction: column; }
                        .how-text, .how-visual { width: 100%; }
                    }
                "#}
            </style>
            <h2 class="reveal-item from-below">{"¿Cómo funciona?"}</h2>
            <p class="how-subtitle reveal-item from-below" style={stagger_style(1, 0.4, 0.0)}>
                {"Cuatro pasos para que cada viaje escolar sea seguro y transparente."}
            </p>
            <div class="how-panel reveal-item zoom" style={stagger_style(2, 0.4, 0.0)}>
                <div class="how-steps">
                    { for STEPS.iter().enumerate().map(|(idx, s)| {
                        let is_active = idx == cycle.active;
                        let onclick = {
                            let cycle = cycle.clone();
                            Callback::from(move |_: MouseEvent| cycle.dispatch(StepAction::Select(idx)))
                        };
                        html! {
                            <button class={classes!("how-step", is_active.then_some("active"))} {onclick} aria-label={s.title}>
                                <div class="how-step-icon">{s.icon}</div>
                                if is_active {
                                    // keyed so the countdown restarts on every step change
                                    <svg key={cycle.active} viewBox="0 0 64 64">
                                        <circle
                                            class="circle-timer"
                                            cx="32" cy="32" r="30"
                                            fill="none"
                                            stroke="#2563eb"
                                            stroke-width="1.5"
                                            stroke-dasharray="188"
                                            stroke-dashoffset="0"
                                            stroke-linecap="round"
                                        />
                                    </svg>
                                }
                            </button>
                        }
                    }) }
                </div>
                <div class="how-body" key={cycle.active}>
                    <div class="how-text">
                        <p class="how-counter">{format!("Paso {} de {}", cycle.active + 1, STEPS.len())}</p>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                    <div class="how-visual">
                        <img src={step.image} alt="Paso visual" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(cycle: StepCycle, action: StepAction) -> StepCycle {
        *Rc::new(cycle).reduce(action)
    }

    #[test]
    fn advance_wraps_around() {
        let mut cycle = StepCycle { active: 0, len: 4 };
        for expected in [1, 2, 3, 0, 1] {
            cycle = apply(cycle, StepAction::Advance);
            assert_eq!(cycle.active, expected);
        }
    }

    #[test]
    fn select_jumps_to_step() {
        let cycle = apply(StepCycle { active: 3, len: 4 }, StepAction::Select(1));
        assert_eq!(cycle.active, 1);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let cycle = apply(StepCycle { active: 2, len: 4 }, StepAction::Select(9));
        assert_eq!(cycle.active, 2);
    }

    #[test]
    fn empty_cycle_stays_put() {
        let cycle = apply(StepCycle { active: 0, len: 0 }, StepAction::Advance);
        assert_eq!(cycle.active, 0);
    }

    #[test]
    fn steps_are_defined() {
        assert_eq!(STEPS.len(), 4);
    }
}
