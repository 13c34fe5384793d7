#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dontbuytops_terminal::app::{App, TypeWriter};
use dontbuytops_terminal::application::driver::AnimatorDriver;
use dontbuytops_terminal::domain::animation::{DelayedReveal, RevealState, TypingRevealer};
use dontbuytops_terminal::infrastructure::scheduler::BrowserScheduler;
use gloo_timers::future::sleep;
use leptos::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn typing_completes_on_real_timers() {
    let driver = AnimatorDriver::mount(TypingRevealer::new("abc", 5), BrowserScheduler, |_: &_| {});
    sleep(Duration::from_millis(80)).await;
    assert_eq!(driver.state().displayed(), "abc");
    assert!(driver.is_idle());
}

#[wasm_bindgen_test]
async fn dropped_reveal_never_fires() {
    let notifications = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notifications);
    let driver = AnimatorDriver::mount(DelayedReveal::new(20), BrowserScheduler, move |_: &RevealState| {
        counter.set(counter.get() + 1)
    });
    drop(driver);
    sleep(Duration::from_millis(60)).await;
    assert_eq!(notifications.get(), 1);
}

#[wasm_bindgen_test]
async fn hero_fades_in_after_first_paint_then_sections_show() {
    mount_to_body(App);
    let document = web_sys::window().unwrap().document().unwrap();

    // inserted without the class so the fade-in transition has a start state
    assert!(document.query_selector(".hero").unwrap().is_some());
    assert!(document.query_selector(".hero.loaded").unwrap().is_none());
    assert!(document.query_selector(".stats-section.visible").unwrap().is_none());
    assert!(document.query_selector(".hero-subtitle .cursor").unwrap().is_none());

    sleep(Duration::from_millis(100)).await;
    assert!(document.query_selector(".hero.loaded").unwrap().is_some());
    assert!(document.query_selector(".stats-section.visible").unwrap().is_none());

    sleep(Duration::from_millis(800)).await;
    assert!(document.query_selector(".stats-section.visible").unwrap().is_some());
    assert!(document.query_selector(".hero-subtitle .cursor").unwrap().is_some());
    assert!(document.query_selector("a.social-link[rel='noopener noreferrer']").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn typewriter_picks_up_a_faster_pace() {
    let (delay, set_delay) = create_signal(10_000u32);
    mount_to_body(move || view! { <TypeWriter text="abc" delay=delay class="pace-check" /> });
    let document = web_sys::window().unwrap().document().unwrap();
    let typed = || document.query_selector(".pace-check").unwrap().unwrap().text_content().unwrap();

    sleep(Duration::from_millis(50)).await;
    assert_eq!(typed(), "_");

    set_delay.set(5);
    sleep(Duration::from_millis(80)).await;
    assert_eq!(typed(), "abc_");
}
