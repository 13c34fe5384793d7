use leptos::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::domain::animation::typing::DEFAULT_TYPING_INTERVAL_MS;
use crate::domain::animation::{DelayedReveal, GlitchFlicker, LoadSequence, Millis, TypingRevealer};
use crate::domain::market_data::SimulatedTicker;
use crate::global_state::site_config;
use crate::presentation::hooks::{use_animator, use_first_paint};
use crate::presentation::ticker_view::{TRACK_COPIES, scroll_track};

pub const SOCIAL_PROFILE_URL: &str = "https://x.com/dontbuytops";

/// `base` plus `modifier` when the flag is set.
pub fn state_class(base: &str, modifier: &str, on: bool) -> String {
    if on { format!("{} {}", base, modifier) } else { base.to_string() }
}

/// Reveals `text` one character per `delay` ms behind a fixed `_` cursor.
#[component]
pub fn TypeWriter(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(into, default = MaybeSignal::Static(DEFAULT_TYPING_INTERVAL_MS))] delay: MaybeSignal<Millis>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (state, animator) = use_animator(TypingRevealer::new(text.get_untracked(), delay.get_untracked()));

    let on_text = animator.clone();
    create_effect(move |previous: Option<String>| {
        let current = text.get();
        if previous.is_some_and(|previous| previous != current) {
            let next = current.clone();
            on_text.reconfigure(move |typing| typing.set_source(next));
        }
        current
    });

    // progress survives a speed change; only the pending tick is re-armed
    create_effect(move |previous: Option<Millis>| {
        let current = delay.get();
        if previous.is_some_and(|previous| previous != current) {
            animator.reconfigure(move |typing| typing.set_interval(current));
        }
        current
    });

    view! {
        <span class=class>
            {move || state.with(|typing| typing.displayed().to_string())}
            <span class="cursor">"_"</span>
        </span>
    }
}

/// Text that briefly glitches on a randomized schedule.
#[component]
pub fn GlitchText(#[prop(into)] text: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let timing = site_config().glitch.timing();
    let (state, _animator) = use_animator(GlitchFlicker::new(timing, SmallRng::from_entropy()));
    let base = format!("glitch-text {}", class);

    view! {
        <span class=move || state_class(&base, "glitching", state.get().active) data-text=text.clone()>
            {text.clone()}
        </span>
    }
}

/// Scrolling strip of simulated quotes.
#[component]
pub fn PriceTicker() -> impl IntoView {
    let config = &site_config().ticker;
    let ticker = SimulatedTicker::new(
        config.seed.clone(),
        config.jitter(),
        config.tick_interval_ms,
        SmallRng::from_entropy(),
    );
    let (entries, _animator) = use_animator(ticker);

    view! {
        <div class="ticker-container">
            <div class="ticker-track">
                {move || entries.with(|entries| {
                    scroll_track(entries, TRACK_COPIES)
                        .into_iter()
                        .map(|row| view! {
                            <div class="ticker-item">
                                <span class="ticker-symbol">{row.symbol}</span>
                                <span class="ticker-price">{row.price}</span>
                                <span class=format!("ticker-change {}", row.trend.as_ref())>{row.change}</span>
                            </div>
                        })
                        .collect_view()
                })}
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(#[prop(into)] label: String, #[prop(into)] value: String, delay: Millis) -> impl IntoView {
    let (state, _animator) = use_animator(DelayedReveal::new(delay));

    view! {
        <div class=move || state_class("stat-card", "visible", state.get().visible)>
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
pub fn SocialLink(#[prop(into)] href: String, #[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <a href=href target="_blank" rel="noopener noreferrer" class="social-link">
            {children()}
            <span>{label}</span>
        </a>
    }
}

/// Page shell: runs the load sequence and lays out every section.
#[component]
pub fn App() -> impl IntoView {
    let config = site_config();
    let (load, _sequence) = use_animator(LoadSequence::new(config.shell.content_delay_ms));
    let painted = use_first_paint();
    let hero_loaded = move || load.get().loaded && painted.get();
    let show_content = move || load.get().show_content;
    let section = move |base: &'static str| move || state_class(base, "visible", show_content());

    let tagline = config.typing.text.clone();
    let typing_delay = config.typing.interval_ms;
    let stats = config.stats.clone();

    view! {
        <style>{STYLES}</style>
        <div class="app">
            <div class="scanlines"></div>
            <div class="grid-bg"></div>
            <div class="noise"></div>

            <PriceTicker />

            <main class="main-content">
                <section class=move || state_class("hero", "loaded", hero_loaded())>
                    <div class="terminal-header">
                        <span class="terminal-dot red"></span>
                        <span class="terminal-dot yellow"></span>
                        <span class="terminal-dot green"></span>
                        <span class="terminal-title">"dontbuytops.terminal"</span>
                    </div>

                    <div class="hero-content">
                        <div class="status-line">
                            <span class="status-indicator"></span>
                            <span class="status-text">"SYSTEM ONLINE"</span>
                        </div>

                        <h1 class="hero-title">
                            <GlitchText text="DON'T BUY TOPS" />
                        </h1>

                        <div class="hero-subtitle">
                            <Show when=show_content fallback=|| ()>
                                <TypeWriter text=tagline.clone() delay=typing_delay />
                            </Show>
                        </div>

                        <div class="hero-quote">
                            <span class="quote-mark">"\""</span>
                            "The best trades are the ones you don't make."
                            <span class="quote-mark">"\""</span>
                        </div>
                    </div>
                </section>

                <section class=section("stats-section")>
                    <h2 class="section-title">
                        <span class="section-marker">"//"</span>
                        " STATS"
                    </h2>
                    <div class="stats-grid">
                        {stats
                            .into_iter()
                            .map(|stat| view! { <StatCard label=stat.label value=stat.value delay=stat.delay_ms /> })
                            .collect_view()}
                    </div>
                </section>

                <section class=section("philosophy-section")>
                    <h2 class="section-title">
                        <span class="section-marker">"//"</span>
                        " PHILOSOPHY"
                    </h2>
                    <div class="philosophy-grid">
                        <div class="philosophy-card">
                            <div class="philosophy-icon">"📉"</div>
                            <h3>"Sell the Rips"</h3>
                            <p>"When everyone's greedy, I'm selling. When everyone's fearful, I'm accumulating."</p>
                        </div>
                        <div class="philosophy-card">
                            <div class="philosophy-icon">"🎯"</div>
                            <h3>"Risk Management"</h3>
                            <p>"Position sizing over predictions. Survive long enough to be right."</p>
                        </div>
                        <div class="philosophy-card">
                            <div class="philosophy-icon">"🧠"</div>
                            <h3>"Contrarian Edge"</h3>
                            <p>"The crowd is right until they're catastrophically wrong."</p>
                        </div>
                    </div>
                </section>

                <section class=section("connect-section")>
                    <h2 class="section-title">
                        <span class="section-marker">"//"</span>
                        " CONNECT"
                    </h2>
                    <div class="social-links">
                        <SocialLink href=SOCIAL_PROFILE_URL label="@dontbuytops">
                            <svg viewBox="0 0 24 24" class="social-icon" fill="currentColor">
                                <path d="M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"></path>
                            </svg>
                        </SocialLink>
                    </div>
                    <div class="connect-cta">
                        <p>"Follow for alpha leaks, market takes, and the occasional shitpost."</p>
                    </div>
                </section>
            </main>

            <footer class="footer">
                <span>"Requested by @dontbuytops · Built by @clonkbot"</span>
            </footer>
        </div>
    }
}

const STYLES: &str = r#"
.app {
    position: relative;
    min-height: 100vh;
    background: #050805;
    color: #c8ffc8;
    font-family: 'JetBrains Mono', 'Courier New', monospace;
    overflow-x: hidden;
}

.scanlines, .grid-bg, .noise {
    position: fixed;
    inset: 0;
    pointer-events: none;
}
.scanlines {
    z-index: 3;
    background: repeating-linear-gradient(0deg, rgba(0, 0, 0, 0.15) 0 1px, transparent 1px 3px);
}
.grid-bg {
    z-index: 0;
    background-image:
        linear-gradient(rgba(0, 255, 65, 0.05) 1px, transparent 1px),
        linear-gradient(90deg, rgba(0, 255, 65, 0.05) 1px, transparent 1px);
    background-size: 40px 40px;
}
.noise {
    z-index: 2;
    opacity: 0.04;
    background: radial-gradient(circle, #fff 0.5px, transparent 0.5px) 0 0 / 3px 3px;
}

.ticker-container {
    position: relative;
    z-index: 1;
    overflow: hidden;
    border-bottom: 1px solid rgba(0, 255, 65, 0.3);
    background: rgba(0, 20, 0, 0.8);
}
.ticker-track {
    display: flex;
    width: max-content;
    animation: ticker-scroll 30s linear infinite;
}
.ticker-item {
    display: flex;
    gap: 10px;
    padding: 8px 28px;
    white-space: nowrap;
}
.ticker-symbol { color: #00ff41; font-weight: 700; }
.ticker-change.positive { color: #00ff41; }
.ticker-change.negative { color: #ff3860; }
@keyframes ticker-scroll {
    from { transform: translateX(0); }
    to { transform: translateX(-33.333%); }
}

.main-content {
    position: relative;
    z-index: 1;
    max-width: 1000px;
    margin: 0 auto;
    padding: 48px 20px;
}

.hero {
    border: 1px solid rgba(0, 255, 65, 0.3);
    border-radius: 8px;
    background: rgba(0, 15, 0, 0.85);
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.hero.loaded { opacity: 1; transform: none; }

.terminal-header {
    display: flex;
    align-items: center;
    gap: 8px;
    padding: 10px 14px;
    border-bottom: 1px solid rgba(0, 255, 65, 0.2);
}
.terminal-dot { width: 12px; height: 12px; border-radius: 50%; }
.terminal-dot.red { background: #ff5f56; }
.terminal-dot.yellow { background: #ffbd2e; }
.terminal-dot.green { background: #27c93f; }
.terminal-title { margin-left: auto; font-size: 12px; opacity: 0.6; }

.hero-content { padding: 40px 32px; }
.status-line { display: flex; align-items: center; gap: 8px; font-size: 12px; }
.status-indicator {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background: #00ff41;
    box-shadow: 0 0 8px #00ff41;
}
.hero-title { font-size: clamp(36px, 8vw, 84px); margin: 24px 0; color: #00ff41; }
.hero-subtitle { min-height: 1.5em; font-size: 18px; }
.hero-quote { margin-top: 28px; font-style: italic; opacity: 0.8; }
.quote-mark { color: #00ff41; }

.cursor { animation: blink 1s step-end infinite; }
@keyframes blink { 50% { opacity: 0; } }

.glitch-text { position: relative; display: inline-block; }
.glitch-text.glitching::before,
.glitch-text.glitching::after {
    content: attr(data-text);
    position: absolute;
    inset: 0;
}
.glitch-text.glitching::before { color: #ff00c1; transform: translate(-3px, 1px); clip-path: inset(0 0 55% 0); }
.glitch-text.glitching::after { color: #00fff9; transform: translate(3px, -1px); clip-path: inset(50% 0 0 0); }

.stats-section, .philosophy-section, .connect-section {
    margin-top: 56px;
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.stats-section.visible, .philosophy-section.visible, .connect-section.visible { opacity: 1; transform: none; }

.section-title { font-size: 20px; letter-spacing: 2px; }
.section-marker { color: #00ff41; }

.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px; }
.stat-card {
    padding: 20px;
    border: 1px solid rgba(0, 255, 65, 0.25);
    opacity: 0;
    transform: scale(0.95);
    transition: opacity 0.5s ease, transform 0.5s ease;
}
.stat-card.visible { opacity: 1; transform: none; }
.stat-value { font-size: 32px; color: #00ff41; }
.stat-label { font-size: 12px; opacity: 0.7; }

.philosophy-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; }
.philosophy-card { padding: 20px; border: 1px solid rgba(0, 255, 65, 0.2); }
.philosophy-icon { font-size: 28px; }

.social-links { display: flex; gap: 16px; }
.social-link {
    display: inline-flex;
    align-items: center;
    gap: 10px;
    padding: 12px 20px;
    border: 1px solid #00ff41;
    color: #00ff41;
    text-decoration: none;
}
.social-link:hover { background: rgba(0, 255, 65, 0.1); }
.social-icon { width: 20px; height: 20px; }
.connect-cta { margin-top: 16px; opacity: 0.8; }

.footer {
    position: relative;
    z-index: 1;
    padding: 24px;
    text-align: center;
    font-size: 12px;
    opacity: 0.5;
}
"#;

#[cfg(test)]
mod tests {
    use super::state_class;

    #[test]
    fn modifier_only_when_flag_is_set() {
        assert_eq!(state_class("hero", "loaded", true), "hero loaded");
        assert_eq!(state_class("hero", "loaded", false), "hero");
    }
}
