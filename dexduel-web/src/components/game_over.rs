use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub score: u32,
    pub high_score: u32,
    pub new_record: bool,
    pub on_retry: Callback<()>,
    pub on_menu: Callback<()>,
}

#[function_component(GameOverScreen)]
pub fn game_over_screen(p: &Props) -> Html {
    let retry = {
        let cb = p.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let menu = {
        let cb = p.on_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <main class="game-over-screen">
            <h1>{ "Game over" }</h1>
            if p.new_record {
                <p class="new-record">{ "New record!" }</p>
            }
            <p class="final-score">{ format!("Score: {}", p.score) }</p>
            <p class="best-score">{ format!("Best: {}", p.high_score) }</p>
            <div class="game-over-actions">
                <button class="retry-btn" onclick={retry}>{ "Play again" }</button>
                <button class="menu-btn" onclick={menu}>{ "Menu" }</button>
            </div>
        </main>
    }
}
