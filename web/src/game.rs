use crate::messages::load_catalog;
use crate::settings::Settings;
use crate::theme::Theme;
use crate::utils::*;
use clap::Args;
use gloo::timers::callback::{Interval, Timeout};
use memorito_core as game;
use game::{BoardMetrics, ButtonId, Extent, GameError, MessageKey, Phase, ScrambleOutcome, SessionId};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

const BUTTON_STYLE: &str =
    "height: 5em; width: 10em; color: white; border: none; font-size: 1em; cursor: pointer;";

const CONTAINER_STYLE: &str = "position: relative; width: 100%; height: 60vh;";

fn button_style(color: game::Color, position: Option<game::Position>, enabled: bool) -> String {
    let mut style = format!("{} background-color: {};", BUTTON_STYLE, color);
    if let Some(game::Position { x, y }) = position {
        style.push_str(&format!(" position: absolute; left: {}px; top: {}px;", x, y));
    }
    if !enabled {
        style.push_str(" pointer-events: none;");
    }
    style
}

fn phase_class(phase: Option<Phase>) -> &'static str {
    use Phase::*;
    match phase {
        None => "idle",
        Some(Setup) => "memorize",
        Some(Scrambling) => "scrambling",
        Some(AwaitingClicks) => "recall",
        Some(Success) => "win",
        Some(Failed) => "lose",
    }
}

/// Refused events are expected, e.g. a timer from a session that was replaced, so they are only logged.
fn accepted<T>(result: game::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(GameError::StaleSession) => {
            log::debug!("dropped event of a replaced session");
            None
        }
        Err(err) => {
            log::debug!("event ignored: {}", err);
            None
        }
    }
}

fn extent_of(node: &NodeRef) -> Extent {
    match node.cast::<HtmlElement>() {
        Some(element) => Extent::new(
            element.offset_width().try_into().unwrap_or(0),
            element.offset_height().try_into().unwrap_or(0),
        ),
        None => {
            log::warn!("element is not mounted, measuring as empty");
            Extent::default()
        }
    }
}

/// Measures the rendered container and buttons at the moment of a scramble step.
struct DomMetrics<'a> {
    container: &'a NodeRef,
    buttons: &'a [(ButtonId, NodeRef)],
}

impl BoardMetrics for DomMetrics<'_> {
    fn container(&self) -> Extent {
        extent_of(self.container)
    }

    fn button(&self, id: ButtonId) -> Extent {
        match self.buttons.iter().find(|(button_id, _)| *button_id == id) {
            Some((_, node)) => extent_of(node),
            None => {
                log::warn!("no element for button {}", id);
                Extent::default()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    Submit,
    StartScramble(SessionId),
    ScrambleTick(SessionId),
    Click(SessionId, ButtonId),
    ToggleTheme,
}

#[derive(Properties, Clone, PartialEq)]
struct ButtonProps {
    id: ButtonId,
    color: game::Color,
    position: Option<game::Position>,
    label: Option<ButtonId>,
    enabled: bool,
    armed: bool,
    node_ref: NodeRef,
    callback: Callback<ButtonId>,
}

#[function_component(ButtonView)]
fn button_component(props: &ButtonProps) -> Html {
    let ButtonProps {
        id,
        color,
        position,
        label,
        enabled,
        armed,
        node_ref,
        callback,
    } = props.clone();

    let class = classes!("game-button", (!enabled).then_some("frozen"));
    let style = button_style(color, position, enabled);
    let onclick = (armed && enabled).then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("button {} clicked", id);
            callback.emit(id);
        })
    });
    let label = label.map(|label| label.to_string()).unwrap_or_default();

    html! {
        <button type="button" id={format!("game-button-{}", id)} ref={node_ref} {class} {style} {onclick}>
            {label}
        </button>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// Prefill the button count
    #[arg(short, long)]
    #[prop_or_default]
    pub count: Option<String>,

    /// Only show messages in the status line, without blocking alerts
    #[arg(long)]
    #[prop_or_default]
    pub no_alerts: bool,
}

pub struct GameView {
    controller: game::GameController<SmallRng>,
    settings: Settings,
    theme: Option<Theme>,
    plan: Option<game::ScramblePlan>,
    status: Option<String>,
    pending_alert: Option<String>,
    input_ref: NodeRef,
    container_ref: NodeRef,
    button_refs: Vec<(ButtonId, NodeRef)>,
    scramble_delay: Option<Timeout>,
    scramble_timer: Option<Interval>,
}

impl GameView {
    fn report(&mut self, ctx: &Context<Self>, key: MessageKey) {
        let text = self.controller.message(key).to_string();
        log::info!("{}", text);
        if !ctx.props().no_alerts {
            self.pending_alert = Some(text.clone());
        }
        self.status = Some(text);
    }

    fn cancel_timers(&mut self) {
        let had_delay = self.scramble_delay.take().is_some();
        let had_timer = self.scramble_timer.take().is_some();
        if had_delay || had_timer {
            log::debug!("cancelled timers of the previous session");
        }
    }

    fn read_input(&self) -> String {
        match self.input_ref.cast::<HtmlInputElement>() {
            Some(input) => input.value(),
            None => {
                log::warn!("count input is not mounted");
                String::new()
            }
        }
    }

    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        let input = self.read_input();
        let plan = match self.controller.submit(&input) {
            Ok(plan) => plan,
            Err(err) => {
                if let Some(key) = err.message_key() {
                    self.report(ctx, key);
                }
                return true;
            }
        };

        self.cancel_timers();
        self.status = None;
        self.plan = Some(plan);
        self.button_refs = self
            .controller
            .session()
            .map(|session| {
                session
                    .buttons()
                    .iter()
                    .map(|button| (button.id(), NodeRef::default()))
                    .collect()
            })
            .unwrap_or_default();

        if let Some(count) = self.controller.session().map(game::GameSession::count) {
            Settings::remember(count);
            self.settings.last_count = Some(count);
        }

        let link = ctx.link().clone();
        let session = plan.session;
        log::debug!("scramble of {} starts in {} ms", session, plan.delay_millis());
        self.scramble_delay = Some(Timeout::new(plan.delay_millis(), move || {
            link.send_message(Msg::StartScramble(session))
        }));
        true
    }

    fn start_scramble(&mut self, ctx: &Context<Self>, session: SessionId) -> bool {
        if accepted(self.controller.begin_scramble(session)).is_none() {
            return false;
        }
        self.scramble_delay = None;

        let Some(plan) = self.plan else {
            log::error!("scramble started without a plan");
            return false;
        };
        let link = ctx.link().clone();
        self.scramble_timer = Some(Interval::new(plan.interval_millis(), move || {
            link.send_message(Msg::ScrambleTick(session))
        }));
        true
    }

    fn scramble_tick(&mut self, session: SessionId) -> bool {
        let metrics = DomMetrics {
            container: &self.container_ref,
            buttons: &self.button_refs,
        };
        match accepted(self.controller.scramble_tick(session, &metrics)) {
            Some(ScrambleOutcome::Moved { remaining }) => {
                log::trace!("scramble step done, {} left", remaining);
                true
            }
            Some(ScrambleOutcome::Finished) => {
                self.scramble_timer = None;
                true
            }
            None => false,
        }
    }

    fn click(&mut self, ctx: &Context<Self>, session: SessionId, button: ButtonId) -> bool {
        match accepted(self.controller.click(session, button)) {
            Some(outcome) => {
                if let Some(key) = outcome.message_key() {
                    self.report(ctx, key);
                }
                true
            }
            None => false,
        }
    }

    fn view_buttons(&self, ctx: &Context<Self>) -> Html {
        let Some(session) = self.controller.session() else {
            return Html::default();
        };
        let session_id = session.id();
        let callback = ctx
            .link()
            .callback(move |button: ButtonId| Msg::Click(session_id, button));

        session
            .buttons()
            .iter()
            .zip(&self.button_refs)
            .map(|(button, (_, node_ref))| {
                html! {
                    <ButtonView
                        key={format!("{}-{}", session_id.get(), button.id())}
                        id={button.id()}
                        color={button.color()}
                        position={button.position()}
                        label={button.label()}
                        enabled={button.is_enabled()}
                        armed={button.is_click_armed()}
                        node_ref={node_ref.clone()}
                        callback={callback.clone()}
                    />
                }
            })
            .collect()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        Self {
            controller: game::GameController::new(load_catalog(), SmallRng::seed_from_u64(seed)),
            settings: Settings::local_or_default(),
            theme: Theme::init(),
            plan: None,
            status: None,
            pending_alert: None,
            input_ref: NodeRef::default(),
            container_ref: NodeRef::default(),
            button_refs: Vec::new(),
            scramble_delay: None,
            scramble_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Submit => self.submit(ctx),
            StartScramble(session) => self.start_scramble(ctx, session),
            ScrambleTick(session) => self.scramble_tick(session),
            Click(session, button) => self.click(ctx, session, button),
            ToggleTheme => {
                self.theme = Theme::cycle(self.theme);
                Theme::apply(self.theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let prefill = self.settings.prefill(ctx.props().count.as_deref());
        let board_class = classes!("board", phase_class(self.controller.phase()));
        let status = self.status.clone().unwrap_or_default();

        let cb_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Submit
        });
        let cb_theme = ctx.link().callback(|_: MouseEvent| ToggleTheme);

        html! {
            <div class="memorito">
                <form onsubmit={cb_submit}>
                    <label for="buttonNumber">{"How many buttons? (3-7)"}</label>
                    <input
                        id="buttonNumber"
                        type="number"
                        min="3"
                        max="7"
                        ref={self.input_ref.clone()}
                        value={prefill}
                    />
                    <button id="submitButton" type="submit">{"Go!"}</button>
                    <button class="theme" type="button" onclick={cb_theme}>
                        {format!("theme: {}", Theme::label(self.theme))}
                    </button>
                </form>
                <p class="status">{status}</p>
                <div id="buttonsContainer" class={board_class} style={CONTAINER_STYLE} ref={self.container_ref.clone()}>
                    {self.view_buttons(ctx)}
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(text) = self.pending_alert.take() {
            gloo::dialogs::alert(&text);
        }
    }
}
