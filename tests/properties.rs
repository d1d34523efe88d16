use std::rc::Rc;

use pattern_demos::easter::{Decoration, Egg, EggFactory, EggKind};
use pattern_demos::fitness::{FitnessSession, Observer, OnlineViewer};
use proptest::prelude::*;

fn decoration() -> impl Strategy<Value = Decoration> {
    prop_oneof![Just(Decoration::Colored), Just(Decoration::Sticker)]
}

fn egg_kind() -> impl Strategy<Value = EggKind> {
    prop_oneof![
        Just(EggKind::Chicken),
        Just(EggKind::Ostrich),
        Just(EggKind::Dinosaur)
    ]
}

fn annotation(decoration: Decoration) -> &'static str {
    match decoration {
        Decoration::Colored => " -> Оцветено",
        Decoration::Sticker => " -> Облепено със стикери",
    }
}

proptest! {
    #[test]
    fn decorated_display_has_one_line_per_layer(
        kind in egg_kind(),
        decorations in prop::collection::vec(decoration(), 0..12),
    ) {
        let mut egg = EggFactory::create(kind);
        let label = egg.kind().to_string();
        for decoration in &decorations {
            egg = decoration.apply(egg);
        }

        let mut buf = Vec::new();
        egg.display(&mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        // Property 1: N decorators produce N+1 lines
        prop_assert_eq!(lines.len(), decorations.len() + 1);

        // Property 2: base label first, then annotations innermost-first
        prop_assert_eq!(lines[0], label.as_str());
        for (line, decoration) in lines[1..].iter().zip(&decorations) {
            prop_assert_eq!(*line, annotation(*decoration));
        }

        // Property 3: decorators keep the base label
        prop_assert_eq!(egg.kind(), label.as_str());
    }

    #[test]
    fn set_action_notifies_each_viewer_once_in_order(
        count in 0usize..20,
        action in "[a-z ]{1,16}",
    ) {
        let mut session = FitnessSession::new();
        for i in 0..count {
            let viewer: Rc<dyn Observer> = Rc::new(OnlineViewer::new(format!("Viewer {}", i + 1)));
            session.add_observer(viewer);
        }

        let mut buf = Vec::new();
        session.set_action(action.clone(), &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        prop_assert_eq!(lines.len(), count);
        for (i, line) in lines.iter().enumerate() {
            let expected = format!("Viewer {} is now {}.", i + 1, action);
            prop_assert_eq!(*line, expected.as_str());
        }
    }

    #[test]
    fn removal_preserves_remaining_order(count in 1usize..10, remove in 0usize..10) {
        let remove = remove % count;
        let viewers: Vec<Rc<dyn Observer>> = (0..count)
            .map(|i| Rc::new(OnlineViewer::new(format!("Viewer {}", i + 1))) as Rc<dyn Observer>)
            .collect();

        let mut session = FitnessSession::new();
        for viewer in &viewers {
            session.add_observer(viewer.clone());
        }
        session.remove_observer(&viewers[remove]);

        let mut buf = Vec::new();
        session.set_action("resting", &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        let expected: Vec<String> = (0..count)
            .filter(|&i| i != remove)
            .map(|i| format!("Viewer {} is now resting.", i + 1))
            .collect();
        let actual: Vec<String> = output.lines().map(String::from).collect();
        prop_assert_eq!(actual, expected);
    }
}
