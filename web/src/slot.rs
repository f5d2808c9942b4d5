use crate::storage::LocalStorageSlot;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::Timeout;
use slotgate_core as game;
use yew::html::Scope;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct SlotProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Where the prize button leads
    #[arg(long)]
    pub prize_url: Option<String>,
}

impl SlotProps {
    fn game_config(&self) -> game::GameConfig {
        match &self.prize_url {
            Some(url) => game::GameConfig::with_prize_url(url.clone()),
            None => game::GameConfig::default(),
        }
    }
}

pub(crate) enum Msg {
    Activate,
    Reset,
    Settle(game::PendingSpin),
    ReelFrame(game::ReelFrame),
    ShowToast(game::Toast),
    HideToast(u32),
    Button(game::ButtonState),
    DisableButton,
    Confetti(Vec<game::Particle>),
    RemoveParticle(u32),
}

/// Forwards controller calls to the component as messages.
pub(crate) struct LinkPresenter {
    link: Scope<SlotView>,
}

impl game::Presenter for LinkPresenter {
    fn animate_reels(&mut self, animation: &game::SpinAnimation) {
        for &frame in animation.frames() {
            let link = self.link.clone();
            Timeout::new(frame.at_ms, move || link.send_message(Msg::ReelFrame(frame))).forget();
        }
    }

    fn show_toast(&mut self, toast: &game::Toast) {
        self.link.send_message(Msg::ShowToast(*toast));
    }

    fn set_button(&mut self, state: game::ButtonState) {
        self.link.send_message(Msg::Button(state));
    }

    fn disable_button(&mut self) {
        self.link.send_message(Msg::DisableButton);
    }

    fn fire_confetti(&mut self, particles: &[game::Particle]) {
        self.link.send_message(Msg::Confetti(particles.to_vec()));
    }

    fn navigate(&mut self, url: &str) {
        log::info!("navigating to {}", url);
        if let Err(err) = gloo::utils::window().location().set_href(url) {
            log::error!("failed to navigate to {}: {:?}", url, err);
        }
    }
}

type Controller = game::GameController<LocalStorageSlot, LinkPresenter>;

pub(crate) struct SlotView {
    controller: Controller,
    reels: [Option<game::ReelSymbol>; game::REEL_COUNT],
    spinning: [bool; game::REEL_COUNT],
    button: game::ButtonState,
    button_enabled: bool,
    toast: Option<game::Toast>,
    toast_visible: bool,
    toast_generation: u32,
    particles: Vec<(u32, game::Particle)>,
    next_particle_id: u32,
}

impl SlotView {
    fn schedule(ctx: &Context<Self>, delay_ms: u32, msg: Msg) {
        let link = ctx.link().clone();
        Timeout::new(delay_ms, move || link.send_message(msg)).forget();
    }

    fn reel_view(&self, index: usize) -> Html {
        let glyph = self.reels[index].map_or(game::PLACEHOLDER_GLYPH, |symbol| symbol.glyph());
        let class = classes!("reel", self.spinning[index].then_some("spin"));
        let id = format!("reel{}", index + 1);
        html! { <div {id} {class}>{glyph}</div> }
    }

    fn toast_view(&self) -> Html {
        let Some(toast) = self.toast else {
            return html! { <div id="toast" class="toast"/> };
        };
        let class = classes!(
            "toast",
            toast.kind.class(),
            self.toast_visible.then_some("show")
        );
        html! { <div id="toast" {class}>{toast.text}</div> }
    }
}

impl Component for SlotView {
    type Message = Msg;
    type Properties = SlotProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let presenter = LinkPresenter {
            link: ctx.link().clone(),
        };
        let mut controller =
            game::GameController::new(LocalStorageSlot, presenter, props.game_config(), seed);
        let button = controller.initialize();

        Self {
            controller,
            reels: [None; game::REEL_COUNT],
            spinning: [false; game::REEL_COUNT],
            button,
            button_enabled: true,
            toast: None,
            toast_visible: false,
            toast_generation: 0,
            particles: Vec::new(),
            next_particle_id: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Activate => {
                match self.controller.activate() {
                    Ok(Some(spin)) => {
                        let delay = spin.settle_after_ms();
                        Self::schedule(ctx, delay, Settle(spin));
                    }
                    Ok(None) => {}
                    Err(err) => log::warn!("ignored click: {}", err),
                }
                false
            }
            Reset => {
                self.controller.reset();
                false
            }
            Settle(spin) => {
                self.controller.settle(spin);
                false
            }
            ReelFrame(frame) => {
                self.reels[frame.reel] = Some(frame.symbol);
                self.spinning[frame.reel] = frame.spinning;
                true
            }
            ShowToast(toast) => {
                self.toast_generation = self.toast_generation.wrapping_add(1);
                self.toast = Some(toast);
                self.toast_visible = true;
                Self::schedule(ctx, toast.duration_ms, HideToast(self.toast_generation));
                true
            }
            HideToast(generation) => {
                if generation == self.toast_generation {
                    self.toast_visible = false;
                    true
                } else {
                    false
                }
            }
            Button(state) => {
                self.button = state;
                self.button_enabled = true;
                true
            }
            DisableButton => {
                let changed = self.button_enabled;
                self.button_enabled = false;
                changed
            }
            Confetti(particles) => {
                for particle in particles {
                    let id = self.next_particle_id;
                    self.next_particle_id = self.next_particle_id.wrapping_add(1);
                    self.particles.push((id, particle));
                    Self::schedule(ctx, particle.lifetime_ms(), RemoveParticle(id));
                }
                true
            }
            RemoveParticle(id) => {
                let before = self.particles.len();
                self.particles.retain(|&(pid, _)| pid != id);
                self.particles.len() != before
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let cb_activate = ctx.link().callback(|_: MouseEvent| Msg::Activate);
        let cb_reset = ctx.link().callback(|_: MouseEvent| Msg::Reset);
        let button_class = classes!(self.button.class());

        html! {
            <div class="slot-machine" style="position:relative">
                <div class="reels">
                    { for (0..game::REEL_COUNT).map(|i| self.reel_view(i)) }
                </div>
                <button id="playBtn" class={button_class} disabled={!self.button_enabled} onclick={cb_activate}>
                    {self.button.label()}
                </button>
                <button id="resetBtn" onclick={cb_reset}>{"Reiniciar contador"}</button>
                {self.toast_view()}
                {
                    for self.particles.iter().map(|(id, particle)| html! {
                        <div key={*id} class="confetti" style={particle_style(particle)}>{particle.glyph}</div>
                    })
                }
            </div>
        }
    }
}
