use family_core::Person;

/// Renders a person's summary box as a Graphviz HTML-like label.
///
/// Long names wrap onto two lines: four or more words break before the last
/// two, three words break before the last one.
pub fn html_label(person: &Person) -> String {
    let mut lines = Vec::new();

    let names: Vec<&str> = person.name.split(' ').collect();
    if names.len() > 2 {
        let split_at = if names.len() >= 4 {
            names.len() - 2
        } else {
            names.len() - 1
        };
        lines.push(format!("<b>{}", names[..split_at].join(" ")));
        lines.push(format!("{}</b>", names[split_at..].join(" ")));
    } else {
        lines.push(format!("<b>{}</b>", person.name));
    }

    if let Some(dob) = person.dob_string() {
        lines.push(dob);
    }
    if let Some(dod) = person.dod_string() {
        lines.push(dod);
    }
    if let Some(place) = &person.birth_place {
        lines.push(place.clone());
    }

    lines.join("<br/>")
}

/// Renders a person's summary box as plain terminal text.
pub fn text_box(person: &Person) -> String {
    let mut lines = vec![format!("Name: {}", person.name)];

    if let Some(dob) = person.dob {
        lines.push(format!("Born: {dob}"));
    }
    if let Some(dod) = person.dod {
        lines.push(format!("Died: {dod}"));
    }
    if let Some(place) = &person.birth_place {
        lines.push(format!("Place of birth: {place}"));
    }

    lines.join("\n")
}
