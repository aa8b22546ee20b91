use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::animation::reveal::{reveal_class, use_reveal, RevealMode, RevealTrigger};
use crate::config;
use crate::team::layout::{orbit_slots, ORBIT_RADIUS};
use crate::team::player::{load_youtube_player, VideoPlayer};
use crate::team::roster::{local_clock, RosterEntry, ROSTER};
use crate::team::sync::SpeakerSync;

const TEAM_VIDEO_ELEMENT: &str = "team-video";
const POLL_INTERVAL_MS: u32 = 1000;

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone(), RevealTrigger::TEAM, RevealMode::Toggle);

    html! {
        <section id="about-us" ref={section} class={reveal_class("team-section", visible)}>
            <style>
                {r#"
                    .team-section {
                        min-height: 100vh;
                        padding: 5rem 1rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background: linear-gradient(135deg, #ffffff 0%, #eff6ff 50%, #ffffff 100%);
                    }
                    .team-title {
                        font-size: 2.5rem;
                        font-weight: 800;
                        text-align: center;
                        margin-bottom: 2.5rem;
                        color: #111827;
                        clip-path: inset(0 0 100% 0);
                        transition: opacity 1.2s ease, transform 1.2s ease, clip-path 1.2s ease !important;
                    }
                    .revealed .team-title { clip-path: inset(0 0 0% 0); }
                    .team-title span { color: #2563eb; }
                    .team-body {
                        display: flex;
                        gap: 3rem;
                        align-items: center;
                        justify-content: center;
                        width: 100%;
                        max-width: 1280px;
                    }
                    .team-video { width: 700px; max-width: 100%; perspective: 800px; }
                    .team-video.reveal-item { transform: translateY(50px) scale(0.8) rotateX(15deg); }
                    .revealed .team-video.reveal-item { transform: none; }
                    .team-video .frame {
                        aspect-ratio: 16 / 9;
                        border-radius: 1rem;
                        overflow: hidden;
                        border: 4px solid #fff;
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
                    }
                    .team-video iframe { width: 100%; height: 100%; border: 0; }
                    .expositor { position: relative; width: 580px; height: 580px; max-width: 100%; }
                    .expositor-main {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 380px;
                        height: 380px;
                        transform: translate(-50%, -50%);
                        border-radius: 9999px;
                        overflow: hidden;
                        border: 4px solid #fff;
                        box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
                        z-index: 20;
                    }
                    .expositor-main img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        animation: speakerSwap 0.9s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .expositor-main::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, transparent 60%, rgba(30, 58, 138, 0.2));
                    }
                    @keyframes speakerSwap {
                        0% { transform: scale(1); opacity: 1; }
                        33% { transform: scale(0.9); opacity: 0.7; }
                        100% { transform: scale(1); opacity: 1; }
                    }
                    .info-card {
                        position: absolute;
                        top: 450px;
                        left: calc(50% - 160px);
                        width: 320px;
                        z-index: 30;
                        padding: 1rem 2rem;
                        border-radius: 1rem;
                        text-align: center;
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        backdrop-filter: blur(16px);
                        background: linear-gradient(135deg, rgba(37, 99, 235, 0.9) 0%, rgba(59, 130, 246, 0.8) 100%);
                        box-shadow: 0 20px 40px rgba(15, 23, 42, 0.2);
                        animation: cardIn 0.8s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    @keyframes cardIn {
                        from { transform: translateY(20px) scale(0.95); opacity: 0; }
                        to { transform: none; opacity: 1; }
                    }
                    .info-card .name { font-size: 2rem; font-weight: 800; line-height: 1.1; text-shadow: 2px 2px 4px rgba(0, 0, 0, 0.5); }
                    .info-card .role { font-size: 1.25rem; opacity: 0.9; text-shadow: 1px 1px 2px rgba(0, 0, 0, 0.4); }
                    .info-card .zone { font-size: 0.85rem; opacity: 0.8; margin-top: 0.5rem; }
                    .orbit-token {
                        position: absolute;
                        top: 0;
                        left: 0;
                        border-radius: 9999px;
                        overflow: hidden;
                        border: 3px solid #fff;
                        cursor: pointer;
                        opacity: 0;
                        box-shadow: 0 10px 20px rgba(15, 23, 42, 0.2);
                        transition: transform 0.7s cubic-bezier(0.34, 1.56, 0.64, 1), opacity 0.7s ease, width 0.7s ease, height 0.7s ease;
                    }
                    .revealed .orbit-token { opacity: 1; }
                    .orbit-token:hover { z-index: 40; }
                    .orbit-token:active { filter: brightness(1.2); }
                    .orbit-token img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(1);
                        transition: filter 0.5s ease, transform 0.5s ease;
                    }
                    .orbit-token:hover img { filter: none; transform: scale(1.1); }
                    .orbit-token .zone-tag {
                        position: absolute;
                        bottom: 0.25rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: #2563eb;
                        color: #fff;
                        font-size: 0.7rem;
                        padding: 0.15rem 0.5rem;
                        border-radius: 9999px;
                        white-space: nowrap;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .orbit-token:hover .zone-tag { opacity: 1; }
                    .team-mobile { display: none; width: 100%; flex-direction: column; align-items: center; }
                    .team-mobile-row { display: flex; gap: 1rem; flex-wrap: wrap; justify-content: center; margin-bottom: 2rem; }
                    .team-mobile-row button {
                        width: 5rem;
                        height: 5rem;
                        border-radius: 9999px;
                        overflow: hidden;
                        padding: 0;
                        border: 3px solid transparent;
                        filter: grayscale(1);
                        transition: all 0.3s ease;
                    }
                    .team-mobile-row button.active { border-color: #3b82f6; filter: none; transform: scale(1.1); }
                    .team-mobile-row img { width: 100%; height: 100%; object-fit: cover; }
                    .team-mobile-card {
                        background: linear-gradient(135deg, #dbeafe, #ffffff);
                        border: 1px solid #bfdbfe;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        width: 100%;
                        max-width: 28rem;
                        text-align: center;
                        animation: cardIn 0.8s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    @media (max-width: 1024px) {
                        .team-body { flex-direction: column; }
                    }
                    @media (max-width: 768px) {
                        .expositor { display: none; }
                        .team-mobile { display: flex; }
                    }
                "#}
            </style>
            <h2 class="team-title reveal-item from-below">
                {"Conoce al equipo detrás de "}<span>{"RutaKids"}</span>
            </h2>
            <TeamCarousel visible={visible} />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamCarouselProps {
    pub visible: bool,
}

pub enum TeamCarouselMsg {
    PlayerReady(Rc<dyn VideoPlayer>),
    Tick,
    Select(&'static str),
}

pub struct TeamCarousel {
    sync: SpeakerSync<'static>,
    _poll: Interval,
}

impl Component for TeamCarousel {
    type Message = TeamCarouselMsg;
    type Properties = TeamCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut sync = SpeakerSync::new(ROSTER);
        sync.set_visible(ctx.props().visible);

        let link = ctx.link().clone();
        let poll = Interval::new(POLL_INTERVAL_MS, move || link.send_message(TeamCarouselMsg::Tick));

        Self { sync, _poll: poll }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TeamCarouselMsg::PlayerReady(player) => {
                self.sync.attach(player);
                false
            }
            TeamCarouselMsg::Tick => self.sync.tick().is_some(),
            TeamCarouselMsg::Select(name) => {
                if !self.sync.is_ready() {
                    log::debug!("Ignoring pick of {}, team video not ready", name);
                }
                self.sync.select(name).is_some()
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        // the iframe has to be in the DOM before YT.Player can bind to it
        if first_render && self.sync.claim_player_load() {
            load_youtube_player(TEAM_VIDEO_ELEMENT, ctx.link().callback(TeamCarouselMsg::PlayerReady));
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.sync.set_visible(ctx.props().visible)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let video_src = format!(
            "https://www.youtube.com/embed/{}?enablejsapi=1&version=3",
            config::TEAM_VIDEO_ID
        );
        let selector = self.sync.selector();
        let Some(active) = selector.active() else {
            return html! {};
        };
        let order: Vec<&RosterEntry> = selector.display_order().collect();
        let slots = orbit_slots(order.len(), ORBIT_RADIUS);
        let revealed = ctx.props().visible;
        let now = Utc::now();

        html! {
            <div class="team-body">
                <div class="team-video reveal-item" style="transition-delay: 0.4s;">
                    <div class="frame">
                        <iframe
                            id={TEAM_VIDEO_ELEMENT}
                            src={video_src}
                            title="RutaKids Team"
                            allow="autoplay; encrypted-media"
                            allowfullscreen={true}
                        ></iframe>
                    </div>
                </div>

                <div class="expositor reveal-item zoom" style="transition-delay: 1s;">
                    <div class="expositor-main">
                        <img key={active.name} src={active.image_url} alt={active.name} />
                    </div>
                    <div class="info-card" key={active.name}>
                        <p class="name">{active.name}</p>
                        <p class="role">{active.role}</p>
                        <div class="zone">{format!("🌍 {} · {}", active.timezone_label, local_clock(active, now))}</div>
                    </div>
                    { for order.iter().skip(1).zip(slots.iter()).map(|(member, slot)| {
                        let name = member.name;
                        let transform = if revealed { slot.transform() } else { slot.hidden_transform() };
                        let style = format!(
                            "transform: {}; width: {size}px; height: {size}px; transition-delay: {:.1}s;",
                            transform,
                            if revealed { slot.entrance_delay_secs() } else { 0.0 },
                            size = slot.size,
                        );
                        html! {
                            <div
                                key={name}
                                class={classes!("orbit-token", member.slug())}
                                {style}
                                onclick={ctx.link().callback(move |_| TeamCarouselMsg::Select(name))}
                            >
                                <img src={member.image_url} alt={name} />
                                <div class="zone-tag">{member.timezone_label}</div>
                            </div>
                        }
                    }) }
                </div>

                <div class="team-mobile">
                    <div class="team-mobile-row">
                        { for ROSTER.iter().map(|member| {
                            let name = member.name;
                            html! {
                                <button
                                    key={name}
                                    class={classes!((name == active.name).then_some("active"))}
                                    onclick={ctx.link().callback(move |_| TeamCarouselMsg::Select(name))}
                                >
                                    <img src={member.image_url} alt={name} />
                                </button>
                            }
                        }) }
                    </div>
                    <div class="team-mobile-card" key={active.name}>
                        <h3>{active.name}</h3>
                        <p class="role">{active.role}</p>
                        <p class="zone">{format!("🌍 Zona horaria: {}", active.timezone_label)}</p>
                        <p>{"Toca una foto para escuchar a cada integrante en el video."}</p>
                    </div>
                </div>
            </div>
        }
    }
}
