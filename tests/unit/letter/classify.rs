use super::*;

#[test]
fn classifies_every_family() {
    assert_eq!(classify("A").unwrap(), LetterType::Type1);
    assert_eq!(classify("V").unwrap(), LetterType::Type1);
    assert_eq!(classify("Σ").unwrap(), LetterType::Type2);
    assert_eq!(classify("W-").unwrap(), LetterType::Type3);
    assert_eq!(classify("Λ").unwrap(), LetterType::Type4);
    assert_eq!(classify("Λ-").unwrap(), LetterType::Type5);
    assert_eq!(classify("β").unwrap(), LetterType::Type6);
}

#[test]
fn unknown_letter_is_an_error() {
    let err = classify("Q-").unwrap_err();
    assert!(matches!(err, TkaError::UnknownLetter(ref l) if l == "Q-"));
    assert!(classify("").is_err());
    assert!(classify("a").is_err());
}

#[test]
fn classification_is_stable_and_tables_disjoint() {
    let mut seen = std::collections::HashSet::new();
    for t in LetterType::ALL {
        for &letter in t.letters() {
            assert!(seen.insert(letter), "{letter} listed twice");
            assert_eq!(classify(letter).unwrap(), t);
            assert_eq!(classify(letter).unwrap(), classify(letter).unwrap());
        }
    }
    assert_eq!(seen.len(), 47);
}
