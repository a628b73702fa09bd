use asciipass::pass::charset::Composition;
use asciipass::{
    CharClass, Error, FastRng, Generator, Policy, PolicyViolation, generate, generate_secure,
    generate_using, generate_with, validate,
};

fn assert_satisfies(policy: &Policy, password: &str) {
    let symbols = policy.effective_symbols();
    let counts = Composition::of(password, &symbols);
    let required: i64 = CharClass::ALL.iter().map(|&c| policy.min(c)).sum();

    assert!(password.chars().count() as i64 >= policy.min_length.max(required));
    assert_eq!(counts.other, 0, "unexpected characters in {password:?}");
    for class in CharClass::ALL {
        let min = policy.min(class) as usize;
        let got = counts.count(class);
        if min == 0 {
            assert_eq!(got, 0, "{} leaked into {password:?}", class.name());
        } else {
            assert!(got >= min, "{}: {got} < {min} in {password:?}", class.name());
        }
    }
}

#[test]
fn all_zero_policy_never_validates() {
    let policy = Policy::new(0);
    assert!(matches!(
        validate(&policy),
        Err(Error::InvalidPolicy {
            reason: PolicyViolation::NoClassRequired
        })
    ));
    assert!(generate(&policy).is_err());
    assert!(generate_secure(&policy).is_err());
}

#[test]
fn custom_symbols_without_letters_or_digits() {
    let policy = Policy::new(10).with_symbol(5).with_symbols(['A', 'B', 'C']);
    for _ in 0..50 {
        let password = generate(&policy).unwrap();
        assert!(password.len() >= 10);
        assert!(password.chars().all(|c| matches!(c, 'A' | 'B' | 'C')));
    }
}

#[test]
fn one_upper_padded_to_one_hundred() {
    let policy = Policy::new(100).with_upper(1);
    for generator in [Generator::Fast, Generator::Secure] {
        let password = generate_using(&policy, generator).unwrap();
        assert_eq!(password.len(), 100);
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    }
}

#[test]
fn single_class_policies_without_min_length() {
    let policies = [
        Policy::new(0).with_upper(1),
        Policy::new(0).with_lower(1),
        Policy::new(0).with_number(1),
        Policy::new(0).with_symbol(1),
        Policy::new(0).with_symbol(1).with_symbols("!@#$%^&*()".chars()),
    ];
    for policy in &policies {
        let password = generate_secure(policy).unwrap();
        assert_eq!(password.len(), 1);
        assert_satisfies(policy, &password);
    }
}

#[test]
fn every_class_with_padding() {
    let policy = Policy::new(32).with_upper(8).with_lower(8).with_number(8).with_symbol(8);
    for _ in 0..20 {
        assert_satisfies(&policy, &generate(&policy).unwrap());
        assert_satisfies(&policy, &generate_secure(&policy).unwrap());
    }
}

#[test]
fn identical_seeds_give_identical_passwords() {
    let policy = Policy::new(16).with_upper(1).with_lower(1).with_number(1).with_symbol(1);
    let a = generate_with(&policy, &mut FastRng::seeded(0xfeed)).unwrap();
    let b = generate_with(&policy, &mut FastRng::seeded(0xfeed)).unwrap();
    assert_eq!(a, b);
    assert_satisfies(&policy, &a);
}

#[test]
fn shared_fast_source_is_usable_across_threads() {
    let policy = Policy::new(20).with_lower(2).with_number(2);
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let policy = policy.clone();
            std::thread::spawn(move || generate(&policy))
        })
        .collect();
    for handle in handles {
        let password = handle.join().unwrap().unwrap();
        assert_satisfies(&policy, &password);
    }
}

#[test]
fn exposed_character_sets() {
    assert_eq!(asciipass::UPPERCASE, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    assert_eq!(asciipass::LOWERCASE, "abcdefghijklmnopqrstuvwxyz");
    assert_eq!(asciipass::NUMBERS, "0123456789");
    assert_eq!(asciipass::SYMBOLS, "!@#$%^&*()-_=+[{]}|;:',\\<.>/?\"");
}
