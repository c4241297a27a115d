// src/core/kdtree/tests/test_builder.rs

#[cfg(test)]
mod builder_tests {
    use crate::core::kdtree::builder::{build_kdtree, build_node};
    use crate::core::kdtree::dataset::DataSet;
    use crate::core::kdtree::error::KdTreeError;
    use crate::core::kdtree::tree::{KdNode, KdTree};
    use crate::core::vector::Vector;

    // Helper to create vectors easily
    fn vec_data(data: &[f64]) -> Vector {
        Vector::new(data.to_vec())
    }

    fn collect_medians(node: Option<&KdNode>, out: &mut Vec<Vector>) {
        if let Some(node) = node {
            out.push(node.median().clone());
            collect_medians(node.left(), out);
            collect_medians(node.right(), out);
        }
    }

    #[test]
    fn test_build_empty() {
        let tree = build_kdtree(Vec::new()).unwrap();
        assert!(tree.root().is_none());
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_build_single_point() {
        let tree = build_kdtree(vec![vec_data(&[1.0, 2.0])]).unwrap();
        let root = tree.root().expect("root");
        assert!(root.is_leaf());
        assert_eq!(root.dim(), 0);
        assert_eq!(root.median(), &vec_data(&[1.0, 2.0]));
        assert_eq!(tree.dimension(), 2);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_build_two_points_larger_becomes_root() {
        let tree = build_kdtree(vec![vec_data(&[1.0]), vec_data(&[2.0])]).unwrap();
        let root = tree.root().expect("root");
        assert_eq!(root.median(), &vec_data(&[2.0]));
        assert!(root.right().is_none());

        let left = root.left().expect("left leaf");
        assert!(left.is_leaf());
        assert_eq!(left.median(), &vec_data(&[1.0]));
    }

    #[test]
    fn test_build_two_points_input_order_irrelevant() {
        let forward = build_kdtree(vec![vec_data(&[1.0]), vec_data(&[2.0])]).unwrap();
        let reversed = build_kdtree(vec![vec_data(&[2.0]), vec_data(&[1.0])]).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_dimension_mismatch_error() {
        let result = build_kdtree(vec![vec_data(&[1.0, 2.0]), vec_data(&[1.0, 2.0, 3.0])]);
        assert!(matches!(result, Err(KdTreeError::DimensionMismatch { expected: 2, found: 3, position: 1 })));
    }

    #[test]
    fn test_build_dimension_zero_error() {
        let result = build_kdtree(vec![Vector::default()]);
        assert!(matches!(result, Err(KdTreeError::ZeroDimension)));
    }

    #[test]
    fn test_build_rejects_nan_component() {
        let result = build_kdtree(vec![vec_data(&[0.0, 0.0]), vec_data(&[f64::NAN, 0.0])]);
        assert_eq!(result, Err(KdTreeError::NonFiniteComponent { position: 1, axis: 0 }));
    }

    #[test]
    fn test_build_rejects_infinite_component() {
        let result = build_kdtree(vec![vec_data(&[f64::INFINITY]), vec_data(&[1.0])]);
        assert!(matches!(result, Err(KdTreeError::NonFiniteComponent { position: 0, axis: 0 })));
    }

    #[test]
    fn test_build_node_rejects_empty_data_set() {
        let mut items = vec![vec_data(&[1.0]), vec_data(&[2.0])];
        let dataset = DataSet::new(&mut items).unwrap();
        let split = dataset.split_by_median_and_dim().unwrap();
        // The right half of a two-item split is empty.
        assert!(matches!(build_node(split.right), Err(KdTreeError::InternalError(_))));
    }

    #[test]
    fn test_build_recursive_logic_simple_split() {
        // Sorted by x: (2,3), (4,7), (5,4), (7,2), (8,1), (9,6)
        // Median index 6 / 2 = 3 -> (7,2).
        let points = vec![
            vec_data(&[2.0, 3.0]),
            vec_data(&[5.0, 4.0]),
            vec_data(&[9.0, 6.0]),
            vec_data(&[4.0, 7.0]),
            vec_data(&[8.0, 1.0]),
            vec_data(&[7.0, 2.0]),
        ];
        let tree = build_kdtree(points).unwrap();
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.depth(), 3);

        let root = tree.root().expect("root");
        assert_eq!(root.dim(), 0);
        assert_eq!(root.median(), &vec_data(&[7.0, 2.0]));

        // Left: (2,3), (4,7), (5,4) sorted by y -> (2,3), (5,4), (4,7)
        let left = root.left().expect("left");
        assert_eq!(left.dim(), 1);
        assert_eq!(left.median(), &vec_data(&[5.0, 4.0]));
        assert_eq!(left.left().map(KdNode::median), Some(&vec_data(&[2.0, 3.0])));
        assert_eq!(left.right().map(KdNode::median), Some(&vec_data(&[4.0, 7.0])));
        assert_eq!(left.left().map(KdNode::dim), Some(0));

        // Right: (8,1), (9,6) sorted by y -> median (9,6), left leaf (8,1)
        let right = root.right().expect("right");
        assert_eq!(right.dim(), 1);
        assert_eq!(right.median(), &vec_data(&[9.0, 6.0]));
        assert_eq!(right.left().map(KdNode::median), Some(&vec_data(&[8.0, 1.0])));
        assert!(right.right().is_none());
    }

    #[test]
    fn test_every_vector_lands_in_exactly_one_node() {
        let points: Vec<Vector> = (0..37_i32)
            .map(|i| vec_data(&[f64::from(i * 7 % 11), f64::from(i * 3 % 5), f64::from(i)]))
            .collect();
        let tree = KdTree::build(points.clone()).unwrap();

        let mut medians = Vec::new();
        collect_medians(tree.root(), &mut medians);
        assert_eq!(medians.len(), points.len());
        for p in &points {
            assert_eq!(medians.iter().filter(|m| *m == p).count(), 1, "missing or duplicated {}", p);
        }
    }

    #[test]
    fn test_duplicates_are_all_kept() {
        let points = vec![vec_data(&[1.0, 1.0]); 5];
        let tree = build_kdtree(points).unwrap();
        let mut medians = Vec::new();
        collect_medians(tree.root(), &mut medians);
        assert_eq!(medians.len(), 5);
    }

    #[test]
    fn test_render_three_points() {
        let tree = build_kdtree(vec![vec_data(&[3.0]), vec_data(&[1.0]), vec_data(&[2.0])]).unwrap();
        let expected = format!(
            "{child}{left} (0, [1])\n{root} (0, [2])\n{child}{right} (0, [3])\n",
            child = "     ",
            left = "    ┌────",
            root = "    ",
            right = "    └────",
        );
        assert_eq!(tree.render(), expected);
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn test_render_empty_tree() {
        assert_eq!(KdTree::empty().render(), "");
    }
}
