use mendeley_bib_core::capitalize_title;

#[test]
fn capitalizes_each_word() {
    assert_eq!(capitalize_title("quantum dots"), "Quantum Dots");
}

#[test]
fn keeps_inner_capitals() {
    assert_eq!(capitalize_title("growth of MoS2 on Au(111)"), "Growth of MoS2 on Au(111)");
}

#[test]
fn small_words_stay_lowercase_inside() {
    assert_eq!(
        capitalize_title("the structure of the atom and the nucleus"),
        "The Structure of the Atom and the Nucleus"
    );
}

#[test]
fn small_word_at_the_end_is_capitalized() {
    assert_eq!(capitalize_title("what it is made of"), "What It Is Made Of");
}

#[test]
fn hyphenated_words_capitalize_both_halves() {
    assert_eq!(capitalize_title("self-assembled monolayers"), "Self-Assembled Monolayers");
    assert_eq!(capitalize_title("state-of-the-art"), "State-of-the-Art");
}

#[test]
fn repeated_spaces_collapse() {
    assert_eq!(capitalize_title("  two   words "), "Two Words");
}

#[test]
fn empty_title() {
    assert_eq!(capitalize_title(""), "");
}
