use std::cell::RefCell;
use std::rc::Rc;

use dexduel_game::{Dex, GameConfig, GamePhase, Guess, RoundController};
use yew::prelude::*;

use crate::components::board::BoardScreen;
use crate::components::game_over::GameOverScreen;
use crate::components::menu::MenuScreen;
use crate::storage::LocalStore;

pub type SharedGame = Rc<RefCell<RoundController<LocalStore>>>;

/// Forward the controller's next pending timed transition through a
/// browser timeout, then re-render and look for the follow-up (the
/// correct path chains a settle timer behind the reveal timer).
///
/// The closure captures the timer epoch at scheduling time; if the run
/// was torn down before the timeout fires, the epoch no longer matches
/// and the callback does nothing.
fn pump_timers(game: &SharedGame, redraw: &UseForceUpdateHandle) {
    let (delay, epoch) = {
        let controller = game.borrow();
        let Some(delay) = controller.next_timer_delay() else {
            return;
        };
        (delay, controller.timer_epoch())
    };
    let game = game.clone();
    let redraw = redraw.clone();
    crate::dom::schedule_timeout(delay, move || {
        {
            let mut controller = game.borrow_mut();
            if controller.timer_epoch() != epoch {
                return;
            }
            controller.advance(delay);
        }
        redraw.force_update();
        pump_timers(&game, &redraw);
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let game: SharedGame = use_mut_ref(|| {
        RoundController::new(Dex::load_builtin(), GameConfig::default(), LocalStore)
    });
    let redraw = use_force_update();

    let on_config = {
        let game = game.clone();
        let redraw = redraw.clone();
        Callback::from(move |config: GameConfig| {
            game.borrow_mut().set_config(config);
            redraw.force_update();
        })
    };

    let on_start = {
        let game = game.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            game.borrow_mut().start_game();
            redraw.force_update();
        })
    };

    let on_guess = {
        let game = game.clone();
        let redraw = redraw.clone();
        Callback::from(move |guess: Guess| {
            game.borrow_mut().make_guess(guess);
            redraw.force_update();
            pump_timers(&game, &redraw);
        })
    };

    let on_menu = {
        let game = game.clone();
        let redraw = redraw.clone();
        Callback::from(move |()| {
            game.borrow_mut().go_to_menu();
            redraw.force_update();
        })
    };

    let controller = game.borrow();
    match controller.phase() {
        GamePhase::Menu => html! {
            <MenuScreen
                config={*controller.config()}
                high_score={controller.high_score()}
                pool_size={controller.pool_size()}
                can_start={controller.can_start()}
                on_config={on_config}
                on_start={on_start}
            />
        },
        GamePhase::Playing | GamePhase::Revealing => {
            let (Some(current), Some(next)) = (controller.current(), controller.next()) else {
                return Html::default();
            };
            html! {
                <BoardScreen
                    current={current.clone()}
                    next={next.clone()}
                    mode={controller.config().mode}
                    score={controller.score()}
                    high_score={controller.high_score()}
                    revealing={controller.phase() == GamePhase::Revealing}
                    last_guess_correct={controller.last_guess_correct()}
                    transitioning={controller.is_transitioning()}
                    on_guess={on_guess}
                    on_menu={on_menu}
                />
            }
        }
        GamePhase::GameOver => html! {
            <GameOverScreen
                score={controller.score()}
                high_score={controller.high_score()}
                new_record={controller.is_new_record()}
                on_retry={on_start}
                on_menu={on_menu}
            />
        },
    }
}
