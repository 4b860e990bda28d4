//! Plausible-name synthesis.
//!
//! Names are drawn uniformly from fixed lists: one surname pool and one
//! given-name pool per gender signal. Entropy comes exclusively from the
//! generator handle the caller passes in, so a seeded generator reproduces
//! the same sequence of names.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Binary gender signal selecting the given-name pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

pub const SURNAMES: [&str; 40] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

pub const GIVEN_MALE: [&str; 30] = [
    "James", "Robert", "John", "Michael", "David", "William", "Richard", "Joseph", "Thomas",
    "Christopher", "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven",
    "Andrew", "Paul", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald",
    "Jason", "Edward", "Jeffrey", "Ryan",
];

pub const GIVEN_FEMALE: [&str; 30] = [
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Betty", "Sandra", "Margaret", "Ashley", "Kimberly", "Emily",
    "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah", "Stephanie", "Rebecca",
    "Sharon", "Laura", "Cynthia", "Amy",
];

/// Draw a gender signal with the given probability of `Male`.
pub fn draw_gender<R: Rng + ?Sized>(rng: &mut R, male_probability: f64) -> Gender {
    if rng.random_bool(male_probability) {
        Gender::Male
    } else {
        Gender::Female
    }
}

/// Draw a full name for the given gender signal.
pub fn full_name<R: Rng + ?Sized>(rng: &mut R, gender: Gender) -> String {
    let given = match gender {
        Gender::Male => GIVEN_MALE.choose(rng),
        Gender::Female => GIVEN_FEMALE.choose(rng),
    };
    let given = given.copied().unwrap_or_default();
    let surname = SURNAMES.choose(rng).copied().unwrap_or_default();
    format!("{given} {surname}")
}
