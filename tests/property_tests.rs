//! Property tests over rationals and generated positions.

use hackenbush::{random_position, random_tree, Color, GameGraph, PositionRng, Rational};
use proptest::prelude::*;

fn rational() -> impl Strategy<Value = Rational> {
    (-1_000i64..1_000, 1i64..1_000).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

fn swap_colors(graph: &GameGraph) -> GameGraph {
    let widen = |color| -> Vec<Vec<i64>> {
        graph
            .edges(color)
            .to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(i64::from).collect())
            .collect()
    };
    GameGraph::new(graph.size(), &widen(Color::Blue), &widen(Color::Red)).unwrap()
}

proptest! {
    #[test]
    fn new_is_lowest_terms(num in -1_000_000i64..1_000_000, den in -1_000_000i64..1_000_000) {
        prop_assume!(den != 0);
        let r = Rational::new(num, den).unwrap();
        prop_assert!(r.denominator() > 0);
        let g = hackenbush::value::gcd(
            u128::from(r.numerator().unsigned_abs()),
            u128::from(r.denominator().unsigned_abs()),
        );
        prop_assert_eq!(g, 1);
        // Same value as the input fraction.
        prop_assert_eq!(
            i128::from(r.numerator()) * i128::from(den),
            i128::from(num) * i128::from(r.denominator())
        );
    }

    #[test]
    fn sum_is_order_independent(values in prop::collection::vec(rational(), 0..8)) {
        let forward = Rational::sum(values.iter().copied()).unwrap();
        let backward = Rational::sum(values.iter().rev().copied()).unwrap();
        prop_assert_eq!(forward, backward);

        let mut rotated = values.clone();
        if !rotated.is_empty() {
            rotated.rotate_left(1);
        }
        prop_assert_eq!(Rational::sum(rotated).unwrap(), forward);
    }

    #[test]
    fn generated_trees_have_dyadic_values(seed in any::<u64>(), size in 1usize..14) {
        let graph = random_tree(&mut PositionRng::new(seed), size, 0.5);
        prop_assert!(graph.is_tree());

        let value = graph.to_tree().unwrap().value().unwrap();
        prop_assert!(value.denominator().count_ones() == 1);
    }

    #[test]
    fn swapping_colors_negates(seed in any::<u64>(), size in 1usize..14) {
        let graph = random_tree(&mut PositionRng::new(seed), size, 0.5);
        let value = graph.to_tree().unwrap().value().unwrap();
        let swapped = swap_colors(&graph).to_tree().unwrap().value().unwrap();
        prop_assert_eq!(swapped, value.checked_neg().unwrap());
    }

    #[test]
    fn moves_leave_no_dangling_sticks(seed in any::<u64>(), size in 1usize..10, sticks in 0usize..20) {
        let mut rng = PositionRng::new(seed);
        let mut graph = random_position(&mut rng, size, sticks, 0.5);
        let mut to_move = Color::Red;

        for _ in 0..sticks {
            let moves = graph.legal_moves(to_move);
            if moves.is_empty() {
                break;
            }
            let (i, j) = moves[rng.gen_range_usize(0..moves.len())];
            let before = graph.stick_count(Color::Red) + graph.stick_count(Color::Blue);
            let outcome = graph.apply_move(to_move, i, j).unwrap();
            let after = graph.stick_count(Color::Red) + graph.stick_count(Color::Blue);
            prop_assert_eq!(before - after, outcome.red_removed + outcome.blue_removed);

            let heights = graph.height_map();
            for vertex in heights.unreachable() {
                prop_assert_eq!(graph.edges(Color::Red).degree(vertex), 0);
                prop_assert_eq!(graph.edges(Color::Blue).degree(vertex), 0);
            }
            prop_assert_eq!(graph.heights()[0], 0);
            to_move = to_move.opponent();
        }
    }

    #[test]
    fn tree_cuts_keep_tree(seed in any::<u64>(), size in 2usize..12) {
        let mut rng = PositionRng::new(seed);
        let mut graph = random_tree(&mut rng, size, 0.5);
        let color = rng.gen_color(0.5);

        if let Some(&(i, j)) = graph.legal_moves(color).first() {
            let before = graph.to_tree().unwrap().value().unwrap();
            graph.apply_move(color, i, j).unwrap();
            prop_assert!(graph.is_tree());
            let after = graph.to_tree().unwrap().value().unwrap();
            match color {
                Color::Red => prop_assert!(after > before),
                Color::Blue => prop_assert!(after < before),
            }
        }
    }
}
