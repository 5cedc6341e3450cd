use super::*;

#[test]
fn tiers_match_divisors() {
    assert_eq!(PropType::Staff.size_class().divisor(), 45.0);
    assert_eq!(PropType::Hand.size_class().divisor(), 50.0);
    assert_eq!(PropType::Club.size_class().divisor(), 60.0);
    assert_eq!(PropType::default(), PropType::Staff);
}

#[test]
fn parses_lowercase_tokens() {
    assert_eq!("bigfan".parse::<PropType>().unwrap(), PropType::Bigfan);
    assert_eq!(" Triquetra ".parse::<PropType>().unwrap(), PropType::Triquetra);
    assert!("spoon".parse::<PropType>().is_err());
    assert_eq!(serde_json::to_value(PropType::Eightrings).unwrap(), "eightrings");
}
