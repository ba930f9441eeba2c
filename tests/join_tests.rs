use donatugee::entities::{application, challenge, techfugee};
use donatugee::join::{attach_to_challenges, attach_to_techfugees};

fn application(id: i64, techfugee_id: i64, challenge_id: i64) -> application::Model {
    application::Model {
        id,
        techfugee_id,
        challenge_id,
        ..Default::default()
    }
}

fn challenge(id: i64) -> challenge::Model {
    challenge::Model {
        id,
        ..Default::default()
    }
}

fn techfugee(id: i64) -> techfugee::Model {
    techfugee::Model {
        id,
        ..Default::default()
    }
}

#[test]
fn test_each_application_lands_under_exactly_one_challenge() {
    let challenges = vec![challenge(1), challenge(2)];
    let applications = vec![
        application(10, 5, 1),
        application(11, 6, 2),
        application(12, 7, 1),
    ];

    let attached = attach_to_challenges(challenges, applications);

    assert_eq!(attached.len(), 2);
    let ids_under_1: Vec<i64> = attached[0].applications.iter().map(|a| a.id).collect();
    let ids_under_2: Vec<i64> = attached[1].applications.iter().map(|a| a.id).collect();
    assert_eq!(ids_under_1, vec![10, 12]);
    assert_eq!(ids_under_2, vec![11]);
}

#[test]
fn test_challenge_order_and_application_order_follow_input() {
    let challenges = vec![challenge(3), challenge(1), challenge(2)];
    let applications = vec![
        application(20, 1, 2),
        application(21, 1, 3),
        application(22, 2, 2),
    ];

    let attached = attach_to_challenges(challenges, applications);

    let challenge_ids: Vec<i64> = attached.iter().map(|c| c.challenge.id).collect();
    assert_eq!(challenge_ids, vec![3, 1, 2]);

    let under_2: Vec<i64> = attached[2].applications.iter().map(|a| a.id).collect();
    assert_eq!(under_2, vec![20, 22]);
}

#[test]
fn test_applications_for_unknown_parents_are_dropped() {
    let challenges = vec![challenge(1)];
    let applications = vec![application(30, 1, 1), application(31, 1, 99)];

    let attached = attach_to_challenges(challenges, applications);

    assert_eq!(attached.len(), 1);
    assert_eq!(attached[0].applications.len(), 1);
    assert_eq!(attached[0].applications[0].id, 30);
}

#[test]
fn test_empty_inputs() {
    assert!(attach_to_challenges(vec![], vec![application(1, 1, 1)]).is_empty());

    let attached = attach_to_challenges(vec![challenge(7)], vec![]);
    assert_eq!(attached.len(), 1);
    assert!(attached[0].applications.is_empty());
}

#[test]
fn test_grouping_by_techfugee_uses_the_techfugee_key() {
    let techfugees = vec![techfugee(1), techfugee(2)];
    let applications = vec![
        application(40, 2, 8),
        application(41, 1, 8),
        application(42, 2, 9),
    ];

    let attached = attach_to_techfugees(techfugees, applications);

    let under_1: Vec<i64> = attached[0].applications.iter().map(|a| a.id).collect();
    let under_2: Vec<i64> = attached[1].applications.iter().map(|a| a.id).collect();
    assert_eq!(under_1, vec![41]);
    assert_eq!(under_2, vec![40, 42]);
}
