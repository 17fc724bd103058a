//! Storage contract tests, run against every backend.

use std::collections::HashSet;

use qengine::{RDFTriple, StoreError, Substitution, Term, Variable};

const SUBJECT_1: &str = "<http://example.org/subject1>";
const SUBJECT_2: &str = "<http://example.org/subject2>";
const PREDICATE_1: &str = "<http://example.org/predicate1>";
const PREDICATE_2: &str = "<http://example.org/predicate2>";
const OBJECT_1: &str = "<http://example.org/object1>";
const OBJECT_2: &str = "<http://example.org/object2>";
const OBJECT_3: &str = "<http://example.org/object3>";

fn c(value: &str) -> Term {
    Term::constant(value)
}

fn v(name: &str) -> Term {
    Term::variable(name)
}

fn sub(pairs: &[(&str, &str)]) -> Substitution {
    pairs.iter().map(|(var, value)| (Variable::new(var), value.to_string())).collect()
}

fn as_set(subs: Vec<Substitution>) -> HashSet<Substitution> {
    subs.into_iter().collect()
}

macro_rules! storage_contract_tests {
    ($name:ident, $store:ty) => {
        mod $name {
            use super::*;
            use qengine::RDFStorage;

            fn sample_store() -> $store {
                let mut store = <$store>::new();
                store.add(&RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_1)).unwrap();
                store.add(&RDFTriple::fact(SUBJECT_2, PREDICATE_1, OBJECT_2)).unwrap();
                store.add(&RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_3)).unwrap();
                store
            }

            #[test]
            fn test_add_all() {
                let mut store = <$store>::new();
                let triples = vec![
                    RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_1),
                    RDFTriple::fact(SUBJECT_2, PREDICATE_2, OBJECT_2),
                ];

                assert!(store.add_all(&triples).unwrap());
                let atoms = store.atoms().unwrap();
                assert!(atoms.contains(&triples[0]));
                assert!(atoms.contains(&triples[1]));

                assert!(!store.add_all(&triples).unwrap());
                assert_eq!(store.size(), 2);
            }

            #[test]
            fn test_add_all_with_partial_overlap() {
                let mut store = <$store>::new();
                store.add(&RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_1)).unwrap();

                let triples = vec![
                    RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_1),
                    RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_2),
                    RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_3),
                ];
                assert!(store.add_all(&triples).unwrap());
                assert_eq!(store.size(), 3);
                assert!(!store.add_all(&[]).unwrap());
            }

            #[test]
            fn test_add_duplicate() {
                let mut store = <$store>::new();
                let triple1 = RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_1);
                let triple2 = RDFTriple::fact(SUBJECT_2, PREDICATE_2, OBJECT_2);
                let triple3 = RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_3);

                assert!(store.add(&triple1).unwrap());
                assert_eq!(store.size(), 1);
                assert!(!store.add(&triple1.clone()).unwrap());
                assert_eq!(store.size(), 1);

                assert!(store.add(&triple2).unwrap());
                assert!(store.add(&triple3).unwrap());
                assert_eq!(store.size(), 3);

                for triple in [&triple1, &triple2, &triple3] {
                    assert!(!store.add(triple).unwrap());
                }
                assert_eq!(store.size(), 3);
                assert_eq!(store.atoms().unwrap().len(), 3);
            }

            #[test]
            fn test_add_rejects_patterns() {
                let mut store = <$store>::new();
                let pattern = RDFTriple::new(v("s"), c(PREDICATE_1), c(OBJECT_1));
                assert!(matches!(store.add(&pattern), Err(StoreError::InvalidInput(_))));

                let empty = RDFTriple::fact("", PREDICATE_1, OBJECT_1);
                assert!(matches!(store.add(&empty), Err(StoreError::InvalidInput(_))));
                assert_eq!(store.size(), 0);
            }

            #[test]
            fn test_match_exact() {
                let store = sample_store();

                let found = store.match_pattern(&RDFTriple::fact(SUBJECT_2, PREDICATE_1, OBJECT_2)).unwrap();
                assert_eq!(found, vec![Substitution::new()]);

                let missing = store.match_pattern(&RDFTriple::fact(SUBJECT_2, PREDICATE_1, OBJECT_1)).unwrap();
                assert!(missing.is_empty());
            }

            #[test]
            fn test_match_one_variable() {
                let store = sample_store();

                let objects = store.match_pattern(&RDFTriple::new(c(SUBJECT_1), c(PREDICATE_1), v("o"))).unwrap();
                assert_eq!(
                    as_set(objects),
                    as_set(vec![sub(&[("o", OBJECT_1)]), sub(&[("o", OBJECT_3)])])
                );

                let subjects = store.match_pattern(&RDFTriple::new(v("s"), c(PREDICATE_1), c(OBJECT_2))).unwrap();
                assert_eq!(subjects, vec![sub(&[("s", SUBJECT_2)])]);

                let predicates = store.match_pattern(&RDFTriple::new(c(SUBJECT_1), v("p"), c(OBJECT_3))).unwrap();
                assert_eq!(predicates, vec![sub(&[("p", PREDICATE_1)])]);
            }

            #[test]
            fn test_match_two_variables() {
                let store = sample_store();

                let by_predicate = store.match_pattern(&RDFTriple::new(v("s"), c(PREDICATE_1), v("o"))).unwrap();
                assert_eq!(by_predicate.len(), 3);

                let by_subject = store.match_pattern(&RDFTriple::new(c(SUBJECT_1), v("p"), v("o"))).unwrap();
                assert_eq!(
                    as_set(by_subject),
                    as_set(vec![
                        sub(&[("p", PREDICATE_1), ("o", OBJECT_1)]),
                        sub(&[("p", PREDICATE_1), ("o", OBJECT_3)]),
                    ])
                );

                let by_object = store.match_pattern(&RDFTriple::new(v("s"), v("p"), c(OBJECT_2))).unwrap();
                assert_eq!(by_object, vec![sub(&[("s", SUBJECT_2), ("p", PREDICATE_1)])]);
            }

            #[test]
            fn test_match_three_variables_uses_pattern_names() {
                let store = sample_store();

                let all = store.match_pattern(&RDFTriple::new(v("x"), v("y"), v("z"))).unwrap();
                assert_eq!(all.len(), 3);
                assert!(all.contains(&sub(&[("x", SUBJECT_2), ("y", PREDICATE_1), ("z", OBJECT_2)])));
            }

            #[test]
            fn test_match_no_result() {
                let store = sample_store();
                assert!(store.match_pattern(&RDFTriple::new(c(SUBJECT_1), c(PREDICATE_2), v("o"))).unwrap().is_empty());
                assert!(store.match_pattern(&RDFTriple::new(c("<unknown>"), v("p"), v("o"))).unwrap().is_empty());
            }

            #[test]
            fn test_match_repeated_variable() {
                let mut store = sample_store();
                store.add(&RDFTriple::fact(SUBJECT_1, PREDICATE_2, SUBJECT_1)).unwrap();

                let pattern = RDFTriple::new(v("x"), v("p"), v("x"));
                assert_eq!(store.match_pattern(&pattern).unwrap(), vec![sub(&[("x", SUBJECT_1), ("p", PREDICATE_2)])]);
                assert_eq!(store.how_many(&pattern).unwrap(), 1);
            }

            #[test]
            fn test_how_many() {
                let store = sample_store();

                let cases = [
                    (RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_1), 1),
                    (RDFTriple::fact(SUBJECT_1, PREDICATE_2, OBJECT_1), 0),
                    (RDFTriple::new(v("s"), c(PREDICATE_1), c(OBJECT_1)), 1),
                    (RDFTriple::new(c(SUBJECT_1), v("p"), c(OBJECT_3)), 1),
                    (RDFTriple::new(c(SUBJECT_1), c(PREDICATE_1), v("o")), 2),
                    (RDFTriple::new(v("s"), v("p"), c(OBJECT_2)), 1),
                    (RDFTriple::new(v("s"), c(PREDICATE_1), v("o")), 3),
                    (RDFTriple::new(c(SUBJECT_2), v("p"), v("o")), 1),
                    (RDFTriple::new(v("s"), v("p"), v("o")), 3),
                    (RDFTriple::new(c("<unknown>"), v("p"), v("o")), 0),
                ];
                for (pattern, expected) in cases {
                    assert_eq!(store.how_many(&pattern).unwrap(), expected, "{}", pattern);
                    assert_eq!(store.match_pattern(&pattern).unwrap().len() as u64, expected, "{}", pattern);
                }
            }

            #[test]
            fn test_size_matches_atoms() {
                let mut store = sample_store();
                store.add(&RDFTriple::fact(SUBJECT_1, PREDICATE_2, OBJECT_1)).unwrap();
                store.add(&RDFTriple::fact(SUBJECT_2, PREDICATE_1, OBJECT_1)).unwrap();

                assert_eq!(store.size(), 5);
                assert_eq!(store.atoms().unwrap().len() as u64, store.size());
                assert_eq!(store.how_many(&RDFTriple::new(v("s"), v("p"), v("o"))).unwrap(), 5);
            }

            #[test]
            fn test_reads_do_not_allocate_ids() {
                let store = sample_store();
                let before = store.dictionary().len();

                let pattern = RDFTriple::new(v("s"), c("<never-seen>"), c(OBJECT_1));
                store.match_pattern(&pattern).unwrap();
                store.how_many(&pattern).unwrap();

                assert_eq!(store.dictionary().len(), before);
                assert_eq!(store.dictionary().lookup("<never-seen>"), None);
            }
        }
    };
}

storage_contract_tests!(giant_table, qengine::GiantTable);
storage_contract_tests!(hexa_store, qengine::HexaStore);

#[test]
fn test_open_from_config() {
    use qengine::{storage, Backend, RDFStorage, StorageConfig};

    for backend in [Backend::GiantTable, Backend::HexaStore] {
        let config = StorageConfig { backend, ..StorageConfig::default() };
        let mut store = storage::open(&config);
        assert!(store.add(&RDFTriple::fact(SUBJECT_1, PREDICATE_1, OBJECT_1)).unwrap());
        assert_eq!(store.size(), 1);
    }
}
