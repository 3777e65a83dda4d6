#![no_main]

use cake_cutting::{cut_all, Cake, Coordinate};
use libfuzzer_sys::fuzz_target;

#[derive(Debug)]
struct CakeInput {
    width: usize,
    height: usize,
    flowers: Vec<Coordinate>,
}

impl<'a> arbitrary::Arbitrary<'a> for CakeInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let width = usize::from(u.int_in_range(1u8..=24)?);
        let height = usize::from(u.int_in_range(1u8..=24)?);

        let flowers = u
            .arbitrary::<Vec<(u8, u8)>>()?
            .into_iter()
            .map(|(x, y)| {
                Coordinate::new(
                    1 + usize::from(x) % width,
                    1 + usize::from(y) % height,
                )
            })
            .collect();

        Ok(CakeInput {
            width,
            height,
            flowers,
        })
    }
}

fuzz_target!(|data: CakeInput| {
    let Ok(mut cake) = Cake::new(data.width, data.height, data.flowers) else {
        return;
    };

    cut_all(&mut cake).expect("valid cakes always cut");

    assert_eq!(cake.pieces().len(), cake.flowers().len());
    assert_eq!(cake.leftover_cells(), 0);
    for piece in cake.pieces() {
        assert_eq!(piece.region.flowers_in(cake.flowers()).len(), 1);
        for cell in piece.region.cells() {
            assert_eq!(cake.piece_of(cell.x, cell.y), Some(piece.id));
        }
    }
});
