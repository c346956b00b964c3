use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use shared::{
    domain::{BootScript, Category, ContentSection, Greeting, Paper, Payload, Project, Record},
    protocol::{LineStyle, RenderEvent, TranscriptEntry},
};

use super::*;
use crate::{pacing::Pauses, sink::RecordingSink};

#[derive(Clone, Default)]
struct RecordingPacer {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    fn delays(&self) -> Vec<Duration> {
        self.delays.lock().expect("delays").clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, delay: Duration) {
        self.delays.lock().expect("delays").push(delay);
    }
}

fn three_section_script() -> BootScript {
    BootScript {
        greeting: None,
        sections: vec![
            ContentSection::Ascii {
                text: "\n##\n##\n".into(),
            },
            ContentSection::Command {
                command: "cat about.txt".into(),
                payload: Payload::Lines(vec!["first".into(), "second".into()]),
            },
            ContentSection::Command {
                command: "cat contact.json".into(),
                payload: Payload::Preformatted("{\n  \"a\": 1\n}".into()),
            },
        ],
    }
}

fn paper(title: &str, github: Option<&str>) -> Record {
    Record::Paper(Paper {
        title: title.into(),
        authors: "A. Author".into(),
        venue: "arXiv • 2025".into(),
        description: "desc".into(),
        link: "https://arxiv.org/abs/1".into(),
        github: github.map(str::to_string),
        tags: "[t]".into(),
    })
}

async fn boot(script: BootScript) -> (BootedSession, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let booted = Sequencer::new(script, RecordingPacer::default())
        .with_pace_scale(0.0)
        .run(SessionState::new(sink.clone()))
        .await;
    (booted, sink)
}

fn block_styles(booted: &BootedSession, index: usize) -> Vec<LineStyle> {
    booted
        .state()
        .transcript()
        .blocks()
        .nth(index)
        .expect("block")
        .lines
        .iter()
        .map(|line| line.style)
        .collect()
}

#[tokio::test]
async fn three_sections_become_three_blocks_in_order() {
    let (booted, _) = boot(three_section_script()).await;
    let transcript = booted.state().transcript();

    let sections: Vec<usize> = transcript.blocks().map(|block| block.section).collect();
    assert_eq!(sections, vec![0, 1, 2]);

    let about = transcript.blocks().nth(1).expect("about");
    assert_eq!(about.lines[0].text, "cat about.txt");
    assert_eq!(about.lines[1].text, "first");
    assert_eq!(about.lines[2].text, "second");

    let contact = transcript.blocks().nth(2).expect("contact");
    assert_eq!(contact.lines[1].style, LineStyle::Preformatted);
    assert_eq!(contact.lines[1].text, "{\n  \"a\": 1\n}");
}

#[tokio::test]
async fn gate_flips_only_after_the_last_block() {
    assert!(SessionState::new(Arc::new(RecordingSink::new())).is_animating());

    let (booted, sink) = boot(three_section_script()).await;
    assert!(!booted.state().is_animating());

    let events = sink.events();
    assert_eq!(events.first(), Some(&RenderEvent::AnimationStarted));
    let last_block = events
        .iter()
        .rposition(|event| matches!(event, RenderEvent::BlockFinished { section: 2 }))
        .expect("last block");
    let finished = events
        .iter()
        .position(|event| matches!(event, RenderEvent::AnimationFinished))
        .expect("finished");
    let opened = events
        .iter()
        .position(|event| matches!(event, RenderEvent::InputOpened { .. }))
        .expect("input");
    assert!(last_block < finished);
    assert!(finished < opened);
}

#[tokio::test]
async fn boot_leaves_exactly_one_enabled_input() {
    let (booted, _) = boot(three_section_script()).await;
    let transcript = booted.state().transcript();
    assert_eq!(transcript.enabled_input_count(), 1);
    assert!(matches!(
        transcript.entries().last(),
        Some(TranscriptEntry::Input(input)) if input.enabled && input.value.is_empty()
    ));
}

#[tokio::test]
async fn typing_a_line_takes_one_step_more_than_its_length() {
    let script = BootScript {
        greeting: None,
        sections: vec![ContentSection::Ascii { text: "abc".into() }],
    };
    let pacing = PacingProfile {
        ascii_line: TypingSpeed::new(7.0, 0.0),
        ..PacingProfile::default()
    };
    let pacer = RecordingPacer::default();
    Sequencer::new(script, pacer.clone())
        .with_pacing(pacing)
        .run(SessionState::new(Arc::new(RecordingSink::new())))
        .await;

    let ms = Duration::from_millis;
    assert_eq!(
        pacer.delays(),
        vec![ms(7), ms(7), ms(7), ms(7), ms(50), ms(200)]
    );
}

#[tokio::test]
async fn jittered_delays_stay_in_range_and_repeat_with_a_seed() {
    let run = || async {
        let pacer = RecordingPacer::default();
        Sequencer::new(three_section_script(), pacer.clone())
            .with_seed(42)
            .run(SessionState::new(Arc::new(RecordingSink::new())))
            .await;
        pacer.delays()
    };
    let first = run().await;
    let second = run().await;
    assert_eq!(first, second);

    // two ascii lines (3 steps and a pause each) and the section pause come first
    let echo_steps = &first[9..9 + "cat about.txt".len() + 1];
    for delay in echo_steps {
        assert!(*delay >= Duration::from_micros(59_999));
        assert!(*delay < Duration::from_millis(65));
    }
}

#[tokio::test]
async fn paper_cards_end_with_static_links_and_tags() {
    let script = BootScript {
        greeting: None,
        sections: vec![ContentSection::Command {
            command: "ls research_papers/".into(),
            payload: Payload::Records(vec![
                paper("One", Some("https://github.com/x/y")),
                paper("Two", None),
            ]),
        }],
    };
    let (booted, _) = boot(script).await;

    use LineStyle::*;
    let card = [PaperTitle, PaperAuthors, PaperVenue, PaperDescription, Link];
    let mut expected = vec![Prompt, Separator];
    expected.extend(card);
    expected.extend([Link, Tags, Separator]);
    expected.extend(card);
    expected.push(Tags);
    assert_eq!(block_styles(&booted, 0), expected);

    let block = booted.state().transcript().blocks().next().expect("block");
    assert_eq!(block.lines[6].text, "[arxiv]");
    assert_eq!(block.lines[7].href.as_deref(), Some("https://github.com/x/y"));
}

#[tokio::test]
async fn project_cards_type_name_description_and_tech() {
    let script = BootScript {
        greeting: None,
        sections: vec![ContentSection::Command {
            command: "ls projects/".into(),
            payload: Payload::Records(vec![Record::Project(Project {
                name: "Flatland Empire".into(),
                description: "city builder".into(),
                tech: "Unity, C#".into(),
            })]),
        }],
    };
    let (booted, _) = boot(script).await;
    use LineStyle::*;
    assert_eq!(
        block_styles(&booted, 0),
        vec![Prompt, Separator, ProjectName, ProjectDescription, ProjectTech]
    );
}

#[tokio::test]
async fn categories_type_header_then_items() {
    let script = BootScript {
        greeting: None,
        sections: vec![ContentSection::Command {
            command: "ls skills/".into(),
            payload: Payload::Categories(vec![
                Category {
                    category: "Programming".into(),
                    items: vec!["Rust".into(), "Python".into()],
                },
                Category {
                    category: "Tools".into(),
                    items: vec!["Git".into()],
                },
            ]),
        }],
    };
    let (booted, _) = boot(script).await;
    use LineStyle::*;
    assert_eq!(
        block_styles(&booted, 0),
        vec![
            Prompt,
            Separator,
            CategoryHeader,
            CategoryItem,
            CategoryItem,
            Separator,
            CategoryHeader,
            CategoryItem
        ]
    );
}

#[tokio::test]
async fn greeting_is_typed_into_the_header() {
    let mut script = three_section_script();
    script.greeting = Some(Greeting {
        command: "whoami".into(),
        response: "Someone".into(),
    });
    let (booted, sink) = boot(script).await;
    let header = booted.state().transcript().header();
    assert_eq!(header.len(), 2);
    assert_eq!(header[0].style, LineStyle::Prompt);
    assert_eq!(header[0].text, "whoami");
    assert_eq!(header[1].text, "Someone");
    assert_eq!(booted.state().transcript().blocks().count(), 3);

    let typed: String = sink
        .events()
        .iter()
        .take_while(|event| !matches!(event, RenderEvent::BlockStarted { .. }))
        .filter_map(|event| match event {
            RenderEvent::TypeChar(ch) => Some(*ch),
            _ => None,
        })
        .collect();
    assert_eq!(typed, "whoami");
}

#[tokio::test]
async fn named_pauses_are_scaled_with_typing() {
    let pacer = RecordingPacer::default();
    let pacing = PacingProfile {
        pauses: Pauses {
            after_section: 1000,
            ..Pauses::default()
        },
        ..PacingProfile::default()
    };
    Sequencer::new(three_section_script(), pacer.clone())
        .with_pacing(pacing)
        .with_pace_scale(0.5)
        .run(SessionState::new(Arc::new(RecordingSink::new())))
        .await;
    assert_eq!(pacer.delays().last(), Some(&Duration::from_millis(500)));
}
