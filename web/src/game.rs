use crate::utils::*;
use clap::Args;
use concentration_core as game;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Shown on face-down cards.
const PLACEHOLDER: &str = "X";

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCardState {
    Hidden,
    Selected,
    Matched,
}

#[derive(Clone, Debug, PartialEq)]
struct ViewCard {
    state: ViewCardState,
    label: AttrValue,
}

impl ViewCard {
    fn is_face_up(&self) -> bool {
        !matches!(self.state, ViewCardState::Hidden)
    }
}

fn view_card(resolver: &game::TurnResolver, pos: game::Position) -> ViewCard {
    let face = resolver.card_at(pos);
    let state = match face {
        game::CardFace::Hidden => ViewCardState::Hidden,
        game::CardFace::Selected(_) => ViewCardState::Selected,
        game::CardFace::Matched(_) => ViewCardState::Matched,
    };
    let label = face
        .is_face_up()
        .then(|| resolver.deck().glyph_at(pos))
        .flatten()
        .unwrap_or(PLACEHOLDER);

    ViewCard {
        state,
        label: AttrValue::from(label.to_owned()),
    }
}

fn click_counter_label(clicks: game::Count) -> String {
    format!("Clicks: {}", clicks)
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Select(game::Position),
    FlipBack(game::PendingFlip),
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    pos: game::Position,
    card: ViewCard,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::Position>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        pos,
        card,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "card",
        match card.state {
            ViewCardState::Hidden => classes!("hidden"),
            ViewCardState::Selected => classes!("selected"),
            ViewCardState::Matched => classes!("matched"),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked (face up: {})", pos, card.is_face_up());
        callback.emit(pos);
    });

    html! {
        <div {class} {onclick}>{props.card.label.clone()}</div>
    }
}

#[derive(Properties, PartialEq)]
struct CelebrationProps {
    clicks: game::Count,
    on_play_again: Callback<MouseEvent>,
}

#[function_component(CelebrationView)]
fn celebration_component(props: &CelebrationProps) -> Html {
    html! {
        <Modal>
            <div class="celebration">
                <p>{"Congratulations! You won! 💖"}</p>
                <p>{click_counter_label(props.clicks)}</p>
                <button onclick={props.on_play_again.clone()}>{"Play Again"}</button>
            </div>
        </Modal>
    }
}

#[derive(Args, Properties, Debug, Default, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the first deal instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// Comma separated symbols to deal instead of the default fish
    #[arg(long)]
    pub(crate) symbols: Option<game::SymbolSet>,
}

/// Result of handling one message.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct SessionUpdate {
    rerender: bool,
    /// Must be sent back as [`Msg::FlipBack`] after its delay.
    schedule: Option<game::PendingFlip>,
}

impl SessionUpdate {
    const fn rerender(rerender: bool) -> Self {
        Self {
            rerender,
            schedule: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GameSession {
    symbols: game::SymbolSet,
    resolver: game::TurnResolver,
    seed: u64,
}

impl GameSession {
    fn new(symbols: game::SymbolSet, seed: u64) -> Self {
        log::debug!("first game, seed: {}", seed);
        Self {
            resolver: game::new_game(&symbols, seed),
            symbols,
            seed,
        }
    }

    fn update(&mut self, msg: Msg, next_seed: impl FnOnce() -> u64) -> SessionUpdate {
        use game::SelectOutcome::*;
        use Msg::*;

        match msg {
            Select(pos) => {
                let outcome = self.resolver.select(pos);
                match outcome {
                    Rejected(reason) => log::trace!("ignored card {}: {:?}", pos, reason),
                    Revealed | Matched | Mismatched(_) => {}
                    Won => log::info!("won with {} clicks", self.resolver.clicks()),
                }
                SessionUpdate {
                    rerender: outcome.has_update(),
                    schedule: outcome.pending_flip(),
                }
            }
            FlipBack(flip) => {
                let outcome = self.resolver.resolve_mismatch(flip);
                log::trace!("flip back {:?}: {:?}", flip.positions(), outcome);
                SessionUpdate::rerender(outcome.has_update())
            }
            NewGame => {
                self.seed = next_seed();
                log::debug!("new game, seed: {}", self.seed);
                // a pending timer keeps running, its flip no longer matches the game and is ignored
                self.resolver.restart(game::deal(&self.symbols, self.seed));
                SessionUpdate::rerender(true)
            }
        }
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    _flip_timeout: Option<Timeout>,
}

impl GameView {
    fn schedule_flip(ctx: &Context<Self>, flip: game::PendingFlip) -> Timeout {
        let link = ctx.link().clone();
        let millis = flip.delay().as_millis().try_into().unwrap_or(u32::MAX);
        Timeout::new(millis, move || link.send_message(Msg::FlipBack(flip)))
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let symbols = props.symbols.clone().unwrap_or_default();
        let seed = props.seed.unwrap_or_else(js_random_seed);

        Self {
            session: GameSession::new(symbols, seed),
            _flip_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let update = self.session.update(msg, js_random_seed);
        if let Some(flip) = update.schedule {
            // the previous timer, if any, can only be stale by now
            self._flip_timeout = Some(Self::schedule_flip(ctx, flip));
        }
        update.rerender
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let resolver = &self.session.resolver;
        let won = resolver.is_won();
        let clicks = resolver.clicks();

        let cb_play_again = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="concentration">
                <h1 class="game-title">{"Memory Game"}</h1>
                if won {
                    <CelebrationView {clicks} on_play_again={cb_play_again}/>
                }
                <div class="memory-game">
                    {
                        for (0..resolver.len()).map(|pos| {
                            let card = view_card(resolver, pos);
                            let locked = !resolver.can_select(pos);
                            let callback = ctx.link().callback(Msg::Select);
                            html! {
                                <CardView key={pos} {pos} {card} {locked} {callback}/>
                            }
                        })
                    }
                </div>
                <p class="click-counter">{click_counter_label(clicks)}</p>
            </div>
        }
    }
}
