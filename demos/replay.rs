use scene_slider::{EventLog, InlineStyleRenderer, Slider, SliderConfig, Stage, StaticCapability};

enum Step {
    Start(Option<&'static str>),
    Pager(usize),
    Next,
    Prev,
    Resize(f64),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = SliderConfig::from_json_str(include_str!("../tests/data/slider_config.json"))?;
    let stage = Stage::from_json_str(include_str!("../tests/data/stage.json"))?;
    let animated = std::env::args().nth(1).as_deref() != Some("--fallback");

    let mut slider = Slider::new(
        config,
        stage,
        &StaticCapability(animated),
        1280.0,
        InlineStyleRenderer::default(),
        (),
        EventLog::default(),
    )?;

    let script = [
        (0.0, Step::Start(Some("#forest"))),
        (50.0, Step::Next),
        (200.0, Step::Pager(3)),
        (450.0, Step::Resize(1024.0)),
        (470.0, Step::Prev),
        (1500.0, Step::Pager(0)),
    ];

    let mut now = 0.0;
    for (at, step) in script {
        while now < at {
            slider.tick(now);
            now += 10.0;
        }
        let moved = match step {
            Step::Start(bookmark) => slider.start(bookmark, at),
            Step::Pager(i) => slider.pager_clicked(i, at),
            Step::Next => slider.next_clicked(at),
            Step::Prev => slider.prev_clicked(at),
            Step::Resize(width) => {
                slider.viewport_resized(width, at);
                true
            }
        };
        if !moved {
            tracing::info!(at, "step ignored");
        }
    }
    for _ in 0..200 {
        slider.tick(now);
        now += 10.0;
    }

    println!("{}", serde_json::to_string_pretty(slider.observer().events())?);
    let styles: Vec<_> = slider.renderer().styles().iter().collect();
    println!("{}", serde_json::to_string_pretty(&styles)?);
    Ok(())
}
