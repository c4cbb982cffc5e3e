use linkseq::{Sequence, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds the `[0, 1, 2, 3]` list used by most scenarios
pub fn sample<S: Sequence + Default>() -> S {
    let mut list = S::default();
    list.append(1);
    list.append(2);
    list.append(3);
    list.prepend(0);
    list
}

/// Asserts the forward and backward snapshots mirror each other
pub fn assert_dual<S: Sequence>(list: &S) {
    let mut forward: Vec<Value> = list.to_vec();
    forward.reverse();
    assert_eq!(forward, list.to_vec_rev());
    assert_eq!(list.to_vec().len(), list.len());
}

/// Applies a seeded mix of mutations to `list` and a `Vec` model side by side,
/// checking the list against the model after every step
pub fn run_against_model<S: Sequence + Default>(seed: u64, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = S::default();
    let mut model: Vec<Value> = Vec::new();

    for _ in 0..steps {
        let value: Value = rng.gen_range(0..16);
        match rng.gen_range(0..7) {
            0 => {
                list.prepend(value);
                model.insert(0, value);
            }
            1 => {
                list.append(value);
                model.push(value);
            }
            2 => {
                let index = rng.gen_range(0..=model.len() + 1);
                let inserted = list.insert_at(value, index);
                if index <= model.len() {
                    assert_eq!(inserted, Ok(()));
                    model.insert(index, value);
                } else {
                    assert!(inserted.is_err());
                }
            }
            3 => {
                let index = rng.gen_range(0..=model.len());
                let removed = list.remove_at(index);
                if index < model.len() {
                    assert_eq!(removed, Ok(model.remove(index)));
                } else {
                    assert!(removed.is_err());
                }
            }
            4 => {
                let position = model.iter().position(|&v| v == value);
                assert_eq!(list.remove(value), position.is_some());
                if let Some(position) = position {
                    model.remove(position);
                }
            }
            5 => {
                list.reverse();
                model.reverse();
            }
            _ => {
                assert_eq!(list.find(value), model.iter().position(|&v| v == value));
            }
        }

        assert!(list.is_well_linked());
        assert_eq!(list.len(), model.len());
        assert_eq!(list.to_vec(), model);
        assert_eq!(list.head(), model.first().copied());
        assert_eq!(list.tail(), model.last().copied());
        assert_dual(&list);
    }
}
