use pokedex_combat::stats::{
    calculate_all_stats, calculate_hp, validate_evs, validate_ivs, Nature,
};

const FLAT_100: [i32; 6] = [100, 100, 100, 100, 100, 100];

#[test]
fn level_100_full_investment_reference_values() {
    let set = calculate_all_stats(FLAT_100, [31; 6], [252; 6], 100, Nature::Hardy);
    // (2*100 + 31 + 63) * 100 / 100 = 294
    assert_eq!(set.hp, 294 + 100 + 10);
    assert_eq!(set.attack, 294 + 5);
    assert_eq!(set.speed, 294 + 5);
}

#[test]
fn adamant_beats_hardy_on_attack() {
    let adamant = calculate_all_stats(FLAT_100, [31; 6], [0, 252, 0, 0, 0, 0], 100, Nature::Adamant);
    let hardy = calculate_all_stats(FLAT_100, [31; 6], [0, 252, 0, 0, 0, 0], 100, Nature::Hardy);
    assert!(adamant.attack > hardy.attack);
    assert_eq!(hardy.attack, 299);
    assert_eq!(adamant.attack, 328); // floor(299 * 1.1)
    // the same nature taxes special attack
    assert_eq!(hardy.special_attack, 236);
    assert_eq!(adamant.special_attack, 212); // floor(236 * 0.9)
}

#[test]
fn neutral_natures_match_each_other() {
    let quirky = calculate_all_stats(FLAT_100, [31; 6], [4; 6], 50, Nature::Quirky);
    let hardy = calculate_all_stats(FLAT_100, [31; 6], [4; 6], 50, Nature::Hardy);
    assert_eq!(quirky, hardy);
}

#[test]
fn hp_is_never_a_nature_target() {
    for nature in [Nature::Adamant, Nature::Bold, Nature::Timid, Nature::Calm] {
        let set = calculate_all_stats(FLAT_100, [31; 6], [0; 6], 100, nature);
        let neutral = calculate_all_stats(FLAT_100, [31; 6], [0; 6], 100, Nature::Hardy);
        assert_eq!(set.hp, neutral.hp);
    }
}

#[test]
fn single_hp_species_ignore_investment() {
    for (iv, ev, level) in [(0, 0, 1), (31, 252, 100), (15, 96, 47)] {
        assert_eq!(calculate_hp(1, iv, ev, level), 1);
    }
}

#[test]
fn total_sums_the_six_stats() {
    let set = calculate_all_stats([78, 84, 78, 109, 85, 100], [31; 6], [0; 6], 50, Nature::Modest);
    assert_eq!(
        set.total,
        set.hp + set.attack + set.defense + set.special_attack + set.special_defense + set.speed
    );
}

#[test]
fn out_of_range_iv_flags_but_still_computes() {
    let ivs = [32, 0, 0, 0, 0, 0];
    let errors = validate_ivs(ivs);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("0 et 31"), "unexpected message: {}", errors[0]);
    // the formula itself stays total
    let set = calculate_all_stats(FLAT_100, ivs, [0; 6], 100, Nature::Hardy);
    assert!(set.hp > 0);
}

#[test]
fn ev_validation_covers_range_step_and_total() {
    assert!(validate_evs([0; 6]).is_empty());
    assert!(validate_evs([252, 252, 4, 0, 0, 0]).is_empty());

    let range = validate_evs([300, 0, 0, 0, 0, 0]);
    assert!(range.iter().any(|e| e.contains("0 et 252")));

    let step = validate_evs([0, 10, 0, 0, 0, 0]);
    assert!(step.iter().any(|e| e.contains("multiple de 4")));

    let total = validate_evs([252, 252, 252, 0, 0, 0]);
    assert!(total.iter().any(|e| e.contains("510")));
}

#[test]
fn validation_accepts_legal_extremes() {
    assert!(validate_ivs([0; 6]).is_empty());
    assert!(validate_ivs([31; 6]).is_empty());
    assert!(validate_evs([252, 252, 0, 0, 0, 4]).is_empty());
}
