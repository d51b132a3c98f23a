//! Interactive process accordion in the terminal.
//!
//! ```text
//! cargo run -p accordion --example process [steps.json]
//! ```
//!
//! Up/Down/Tab move between steps, Enter/Space or a click toggles one,
//! `r` toggles reduced motion, `q`/Esc/Ctrl+C quits.

use std::fs::{self, File};
use std::time::Duration;

use accordion::markup::{self, steps_from_json};
use accordion::{Accordion, AccordionConfig, DomDocument, ItemId, ProcessStep, Toggle};
use panedom::{
    find_element_mut, render_lines, AnimationState, Color, Edges, Element, Event, Key, Modifiers,
    Style, Terminal,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("process.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let steps = match std::env::args().nth(1) {
        Some(path) => steps_from_json(&fs::read_to_string(path)?)?,
        None => builtin_steps(),
    };
    let config = AccordionConfig::default();

    let mut term = Terminal::new()?;
    let mut root = page(markup::build(&steps, &config));
    let mut width = term.size().0;
    let mut anim = AnimationState::new();

    let mut accordion = {
        let mut doc = DomDocument::new(&mut root, &config, width);
        Accordion::mount(&mut doc)
    };
    let mut focus = accordion.open_index().unwrap_or(ItemId::new(0));

    loop {
        set_focus(&mut root, &accordion, focus);
        anim.update(&root);
        let frame = render_lines(&root, width, &anim);
        term.draw(&frame)?;

        let timeout = anim.has_active_transitions().then_some(FRAME);
        let events = term.poll(timeout)?;

        let mut doc = DomDocument::new(&mut root, &config, width);
        for event in events {
            let toggle = match event {
                Event::Key {
                    key: Key::Char('c'),
                    modifiers,
                } if modifiers == Modifiers::ctrl() => return Ok(()),
                Event::Key {
                    key: Key::Char('q') | Key::Escape,
                    modifiers,
                } if modifiers.none() => return Ok(()),
                Event::Key {
                    key: Key::Char('r'),
                    modifiers,
                } if modifiers.none() => {
                    anim.set_reduced_motion(!anim.reduced_motion());
                    continue;
                }
                Event::Key {
                    key: Key::Down | Key::Tab,
                    ..
                } => {
                    focus = step_focus(&accordion, focus, 1);
                    continue;
                }
                Event::Key {
                    key: Key::Up | Key::BackTab,
                    ..
                } => {
                    focus = step_focus(&accordion, focus, -1);
                    continue;
                }
                Event::Key {
                    key: Key::Enter | Key::Char(' '),
                    ..
                } => accordion.handle_trigger_activated(focus, &doc),
                Event::Click { y, .. } => match frame.hit(y) {
                    Some(target) => {
                        let target = target.to_string();
                        if let Some(id) = accordion.item_for_trigger(&target) {
                            focus = id;
                        }
                        accordion.activate_trigger(&target, &doc)
                    }
                    None => Toggle::Ignored,
                },
                Event::Resize { width: w, .. } => {
                    width = w;
                    doc.set_width(width);
                    accordion.remeasure(&doc);
                    Toggle::Ignored
                }
                Event::Key { .. } => Toggle::Ignored,
            };
            if toggle != Toggle::Ignored {
                log::info!("{toggle:?}");
            }
        }
        accordion.project(&mut doc);
    }
}

fn page(process: Element) -> Element {
    Element::col()
        .id("page")
        .padding(Edges::symmetric(1, 2))
        .gap(1)
        .child(
            Element::text("How we work")
                .style(Style::new().bold().foreground(Color::oklch(0.9, 0.05, 250.0))),
        )
        .child(process)
        .child(
            Element::text("↑/↓ move · enter toggle · r reduced motion · q quit")
                .style(Style::new().dim()),
        )
}

fn set_focus(root: &mut Element, accordion: &Accordion<String>, focus: ItemId) {
    for item in accordion.items() {
        if let Some(trigger) = find_element_mut(root, item.trigger()) {
            trigger.focused = item.id() == focus;
        }
    }
}

fn step_focus(accordion: &Accordion<String>, focus: ItemId, delta: isize) -> ItemId {
    let len = accordion.len();
    if len == 0 {
        return focus;
    }
    let next = focus.index().saturating_add_signed(delta).min(len - 1);
    ItemId::new(next)
}

fn builtin_steps() -> Vec<ProcessStep> {
    vec![
        ProcessStep::new(
            "Discovery",
            "We start by listening. Interviews and a look at your current tools tell us \
             where the real friction is.",
        )
        .image("discovery.png", "Workshop whiteboard")
        .default_open(),
        ProcessStep::new(
            "Design",
            "Low-fidelity sketches first, then clickable prototypes you can put in front \
             of users within a week.",
        )
        .image("design.png", "Wireframes"),
        ProcessStep::new(
            "Build",
            "Short iterations with a demo at the end of each. You see working software \
             early and often.",
        )
        .image("build.png", "Sprint board"),
        ProcessStep::new(
            "Launch",
            "We ship behind a flag, watch the numbers, and roll out once everything \
             looks healthy.",
        )
        .image("launch.png", "Release checklist"),
    ]
}
