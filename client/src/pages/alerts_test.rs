use super::*;

fn filled() -> AlertForm {
    AlertForm {
        title: "Heavy rainfall".to_owned(),
        message: "Expect flooding in low-lying gardens this week.".to_owned(),
        ..AlertForm::default()
    }
}

#[test]
fn defaults_match_first_options() {
    let form = AlertForm::default();
    assert_eq!(form.alert_type, "Weather Alert");
    assert_eq!(form.severity, "Medium");
    assert_eq!(form.region, "All");
    assert_eq!(form.delivery_time, "immediate");
}

#[test]
fn complete_form_builds_payload() {
    let payload = build_alert(&AlertForm { region: "Eastern".to_owned(), ..filled() }).expect("payload");
    assert_eq!(payload.region, "Eastern");
    assert_eq!(payload.title, "Heavy rainfall");
    assert_eq!(payload.delivery_time, "immediate");
}

#[test]
fn missing_title_produces_no_payload() {
    let form = AlertForm { title: String::new(), ..filled() };
    assert_eq!(build_alert(&form).unwrap_err().0, "Title is required.");
}

#[test]
fn missing_message_produces_no_payload() {
    let form = AlertForm { message: "  ".to_owned(), ..filled() };
    assert_eq!(build_alert(&form).unwrap_err().0, "Message is required.");
}

#[test]
fn unknown_region_is_rejected() {
    let form = AlertForm { region: "Atlantis".to_owned(), ..filled() };
    assert_eq!(build_alert(&form).unwrap_err().0, "Choose a valid region.");
}

#[test]
fn scheduled_delivery_is_accepted() {
    let form = AlertForm { delivery_time: DELIVERY_SCHEDULED.to_owned(), ..filled() };
    assert_eq!(build_alert(&form).expect("payload").delivery_time, "scheduled");
}
