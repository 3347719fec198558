use dexduel_game::constants::{MAX_GENERATION, MIN_GENERATION};
use dexduel_game::{GameConfig, GuessMode};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: GameConfig,
    pub high_score: u32,
    pub pool_size: usize,
    pub can_start: bool,
    pub on_config: Callback<GameConfig>,
    pub on_start: Callback<()>,
}

fn clamp_gen(value: &str, fallback: u8) -> u8 {
    value
        .parse::<u8>()
        .map_or(fallback, |g| g.clamp(MIN_GENERATION, MAX_GENERATION))
}

#[function_component(MenuScreen)]
pub fn menu_screen(p: &Props) -> Html {
    let on_mode = {
        let cb = p.on_config.clone();
        let config = p.config;
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                let mode = GuessMode::from_key(&sel.value()).unwrap_or_default();
                cb.emit(GameConfig { mode, ..config });
            }
        })
    };
    let on_min_gen = {
        let cb = p.on_config.clone();
        let config = p.config;
        Callback::from(move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                let min_gen = clamp_gen(&input.value(), config.min_gen);
                cb.emit(GameConfig { min_gen, ..config });
            }
        })
    };
    let on_max_gen = {
        let cb = p.on_config.clone();
        let config = p.config;
        Callback::from(move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                let max_gen = clamp_gen(&input.value(), config.max_gen);
                cb.emit(GameConfig { max_gen, ..config });
            }
        })
    };
    let on_evolved = {
        let cb = p.on_config.clone();
        let config = p.config;
        Callback::from(move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(GameConfig {
                    fully_evolved_only: input.checked(),
                    ..config
                });
            }
        })
    };
    let start = {
        let cb = p.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <main class="menu-screen">
            <h1>{ "Dexduel" }</h1>
            <section class="menu-options">
                <label for="mode-select">{ "Compare by" }</label>
                <select id="mode-select" onchange={on_mode}>
                    { for GuessMode::ALL.iter().map(|mode| html! {
                        <option value={mode.key()} selected={*mode == p.config.mode}>
                            { mode.label() }
                        </option>
                    }) }
                </select>
                <label for="min-gen">{ "From generation" }</label>
                <input id="min-gen" type="number"
                    min={MIN_GENERATION.to_string()}
                    max={MAX_GENERATION.to_string()}
                    value={p.config.min_gen.to_string()}
                    onchange={on_min_gen} />
                <label for="max-gen">{ "To generation" }</label>
                <input id="max-gen" type="number"
                    min={MIN_GENERATION.to_string()}
                    max={MAX_GENERATION.to_string()}
                    value={p.config.max_gen.to_string()}
                    onchange={on_max_gen} />
                <label for="fully-evolved">
                    <input id="fully-evolved" type="checkbox"
                        checked={p.config.fully_evolved_only}
                        onchange={on_evolved} />
                    { "Fully evolved only" }
                </label>
            </section>
            <p class="menu-pool">{ format!("{} creatures in pool", p.pool_size) }</p>
            <p class="menu-best">{ format!("Best ({}): {}", p.config.mode.label(), p.high_score) }</p>
            if !p.can_start {
                <p class="menu-warning">{ "Not enough creatures match these filters." }</p>
            }
            <button class="start-btn" onclick={start} disabled={!p.can_start}>
                { "Start" }
            </button>
        </main>
    }
}
