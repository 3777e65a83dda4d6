use cake_cutting::{Cake, Coordinate};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::collections::BTreeSet;

/// Draw `count` distinct flowers uniformly from a `width` x `height` cake.
///
/// # Panics
///  - If `count` is larger than the number of cells.
#[allow(dead_code)]
pub fn random_flowers(seed: u64, count: usize, width: usize, height: usize) -> Vec<Coordinate> {
    assert!(
        count <= width * height,
        "Cannot place [{}] flowers on a [{}x{}] cake.",
        count,
        width,
        height
    );

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut flowers = BTreeSet::new();

    while flowers.len() < count {
        flowers.insert(Coordinate::new(
            rng.random_range(1..=width),
            rng.random_range(1..=height),
        ));
    }

    log::debug!(
        "Generated [{}] flowers on a [{}x{}] cake from seed [{}].",
        count,
        width,
        height,
        seed
    );

    flowers.into_iter().collect()
}

/// Check that the pieces of `cake` cover every cell exactly once, that each
/// piece holds exactly one flower, and that there are as many pieces as
/// flowers.
///
/// # Panics
///  - If any of those properties does not hold.
#[allow(dead_code)]
pub fn assert_valid_tiling(cake: &Cake) {
    let width = cake.width();
    let height = cake.height();
    let mut owner = vec![0usize; width * height];

    for piece in cake.pieces() {
        let region = piece.region;
        assert!(
            region.x1() >= 1 && region.y1() >= 1 && region.x2() <= width && region.y2() <= height,
            "Piece [{}] at [{:?}] leaves the [{}x{}] cake.",
            piece.id,
            region,
            width,
            height
        );

        for cell in region.cells() {
            let index = (cell.y - 1) * width + (cell.x - 1);
            assert_eq!(
                owner[index], 0,
                "Cell [{:?}] is in both piece [{}] and piece [{}].",
                cell, owner[index], piece.id
            );
            owner[index] = piece.id;
        }

        let flowers = region.flowers_in(cake.flowers());
        assert_eq!(
            flowers.len(),
            1,
            "Piece [{}] at [{:?}] holds flowers [{:?}].",
            piece.id,
            region,
            flowers
        );
    }

    assert!(
        owner.iter().all(|id| *id != 0),
        "Some cells were left over on the [{}x{}] cake.",
        width,
        height
    );
    assert_eq!(cake.pieces().len(), cake.flowers().len());
    assert_eq!(cake.leftover_cells(), 0);

    let ids: BTreeSet<_> = cake.pieces().iter().map(|piece| piece.id).collect();
    assert_eq!(ids, (1..=cake.pieces().len()).collect());
}
