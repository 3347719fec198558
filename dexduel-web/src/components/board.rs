use dexduel_game::{Guess, GuessMode, Species};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Species,
    pub next: Species,
    pub mode: GuessMode,
    pub score: u32,
    pub high_score: u32,
    pub revealing: bool,
    #[prop_or_default]
    pub last_guess_correct: Option<bool>,
    pub transitioning: bool,
    pub on_guess: Callback<Guess>,
    pub on_menu: Callback<()>,
}

fn format_value(mode: GuessMode, species: &Species) -> String {
    let value = mode.value_of(species);
    if mode.is_weight_based() {
        format!("{value:.1} {}", mode.unit())
    } else {
        format!("{value:.0}")
    }
}

#[function_component(BoardScreen)]
pub fn board_screen(p: &Props) -> Html {
    let locked = p.revealing || p.transitioning;
    let higher = {
        let cb = p.on_guess.clone();
        Callback::from(move |_| cb.emit(Guess::Higher))
    };
    let lower = {
        let cb = p.on_guess.clone();
        Callback::from(move |_| cb.emit(Guess::Lower))
    };
    let menu = {
        let cb = p.on_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let verdict = match p.last_guess_correct {
        Some(true) => Some(("verdict correct", "Correct!")),
        Some(false) => Some(("verdict wrong", "Wrong!")),
        None => None,
    };

    html! {
        <main class="board-screen">
            <header class="board-header">
                <span class="score">{ format!("Score: {}", p.score) }</span>
                <span class="best">{ format!("Best: {}", p.high_score) }</span>
                <button class="quit-btn" onclick={menu}>{ "Menu" }</button>
            </header>
            <section class="duel">
                <div class="card known">
                    <img src={p.current.sprite_url()} alt={p.current.name.clone()} />
                    <h2>{ p.current.name.clone() }</h2>
                    <p class="value">{ format_value(p.mode, &p.current) }</p>
                </div>
                <div class="card challenger">
                    <img src={p.next.sprite_url()} alt={p.next.name.clone()} />
                    <h2>{ p.next.name.clone() }</h2>
                    if p.revealing {
                        <p class="value">{ format_value(p.mode, &p.next) }</p>
                    } else {
                        <p class="value hidden-value">{ "?" }</p>
                    }
                </div>
            </section>
            if let Some((class, text)) = verdict {
                <p class={class}>{ text }</p>
            }
            <p class="prompt">{ format!("{}: higher or lower?", p.mode.label()) }</p>
            <div class="guess-buttons">
                <button class="higher-btn" onclick={higher} disabled={locked}>{ "Higher" }</button>
                <button class="lower-btn" onclick={lower} disabled={locked}>{ "Lower" }</button>
            </div>
        </main>
    }
}
