use refill_core::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Click {
    MoreCoffee,
    Refill,
}

struct Frame {
    cups: CounterState,
    lines: Vec<String>,
}

fn app() -> Frame {
    let cups = use_counter(Some(5));

    reset_effect!(cups.reset_epoch(), || {
        log::info!("Refilled: back to {} cups", cups.initial());
    });

    let lines = (0..cups.snapshot().cups())
        .map(|i| format!("{:>3}. ☕️", i + 1))
        .collect();

    Frame { cups, lines }
}

fn render(frame: &Frame) {
    println!("-- {} cup(s) --", frame.lines.len());
    for line in &frame.lines {
        println!("{line}");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let session = Session::new();
    let mut frame = session.compose(app);
    render(&frame);

    let script = [
        Click::MoreCoffee,
        Click::MoreCoffee,
        Click::MoreCoffee,
        Click::Refill,
        Click::MoreCoffee,
        Click::Refill,
    ];

    for click in script {
        log::debug!("click: {click:?}");
        match click {
            Click::MoreCoffee => frame.cups.try_increment()?,
            Click::Refill => frame.cups.reset(),
        }

        if session.take_dirty() {
            frame = session.compose(app);
            render(&frame);
        }
    }

    let last = frame.cups.snapshot();
    println!("final: count={} resets={}", last.count, last.reset_epoch);
    session.end();
    Ok(())
}
