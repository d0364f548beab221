use std::any;

#[cfg(feature = "serde")]
use serde_test::{assert_tokens, Token};

use statmat::{
    fill, ColMajor, DenseMat, DenseStorage, Expression, Major, Matrix, Mode, Storage,
};

#[test]
fn test_matrix() {
    let mut a = DenseMat::<i32, 2, 3>::zeros();

    assert_eq!(a.rows(), 2);
    assert_eq!(a.cols(), 3);
    assert_eq!(a.len(), 6);
    assert_eq!(a.mode(), Mode::Dense);
    assert_eq!(a.major(), Major::Row);
    assert_eq!(a.as_slice(), &[0; 6][..]);

    for i in 0..2 {
        for j in 0..3 {
            a[[i, j]] = 10 * i as i32 + j as i32;

            assert_eq!(a[[i, j]], 10 * i as i32 + j as i32);
        }
    }

    assert_eq!(a.get(1, 2), Some(&12));
    assert_eq!(a.get(2, 0), None);
    assert_eq!(a.get(0, 3), None);

    *a.get_mut(1, 2).unwrap() = 99;

    assert_eq!(a[[1, 2]], 99);

    let b = DenseMat::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]);
    let c = DenseMat::<i32, 2, 3, ColMajor>::from_rows([[1, 2, 3], [4, 5, 6]]);

    assert_eq!(b.as_slice(), &[1, 2, 3, 4, 5, 6][..]);
    assert_eq!(c.as_slice(), &[1, 4, 2, 5, 3, 6][..]);
    assert_eq!(c.major(), Major::Col);

    assert_eq!(b, c);
    assert_eq!(b, c.convert::<DenseStorage<i32, 2, 3>>());
    assert_eq!(c, b.convert::<DenseStorage<i32, 2, 3, ColMajor>>());

    for i in 0..2 {
        for j in 0..3 {
            assert_eq!(b[[i, j]], c[[i, j]]);
        }
    }

    let mut indices = Vec::new();
    let mut values = Vec::new();

    b.traverse_indices(|i, j| indices.push((i, j)));
    c.traverse_values(|x| values.push(*x));

    assert_eq!(indices, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(values, [1, 4, 2, 5, 3, 6]);

    let mut indices = Vec::new();

    c.traverse_indices(|i, j| indices.push((i, j)));

    assert_eq!(indices, [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);

    assert_eq!(DenseMat::<i32, 2, 2>::from_elem(7).as_slice(), &[7; 4][..]);
    assert_eq!(DenseMat::<i32, 2, 2>::default(), DenseMat::<i32, 2, 2>::zeros());
    assert_eq!(DenseMat::<i32, 2, 2>::from([[1, 2], [3, 4]]), DenseMat::<i32, 2, 2>::from_fn(|i, j| {
        1 + 2 * i as i32 + j as i32
    }));

    assert_eq!(b.cast::<i64>(), DenseMat::<i64, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]));

    assert_eq!(format!("{:?}", b), "[[1, 2, 3], [4, 5, 6]]");
    assert_eq!(format!("{:?}", c), "[[1, 2, 3], [4, 5, 6]]");
}

#[test]
fn test_rebind() {
    assert_eq!(
        any::type_name::<<DenseStorage<i32, 2, 3> as Storage<i32, 2, 3>>::Rebind<i32, 2, 3>>(),
        any::type_name::<DenseStorage<i32, 2, 3>>()
    );
    assert_eq!(
        any::type_name::<<DenseStorage<i32, 2, 3> as Storage<i32, 2, 3>>::Rebind<f64, 3, 2>>(),
        any::type_name::<DenseStorage<f64, 3, 2>>()
    );
    assert_eq!(
        any::type_name::<
            <DenseStorage<i32, 2, 3, ColMajor> as Storage<i32, 2, 3>>::Rebind<i32, 4, 4>,
        >(),
        any::type_name::<DenseStorage<i32, 4, 4, ColMajor>>()
    );
}

#[test]
fn test_expr() {
    let a = DenseMat::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
    let b = DenseMat::<i32, 2, 2>::from_rows([[5, 6], [7, 8]]);
    let z = DenseMat::<i32, 2, 2>::zeros();

    assert_eq!((&a + &b).eval(), DenseMat::<i32, 2, 2>::from_rows([[6, 8], [10, 12]]));
    assert_eq!((&b - &a).eval(), DenseMat::<i32, 2, 2>::from_rows([[4, 4], [4, 4]]));
    assert_eq!((-&a).eval(), DenseMat::<i32, 2, 2>::from_rows([[-1, -2], [-3, -4]]));

    assert_eq!((&a * 3).eval(), DenseMat::<i32, 2, 2>::from_rows([[3, 6], [9, 12]]));
    assert_eq!((3 * &a).eval(), (&a * 3).eval());
    assert_eq!((&a * fill(3)).eval(), (&a * 3).eval());
    assert_eq!((fill(3) * &a).eval(), (&a * 3).eval());

    assert!(&a + &z == a);
    assert!(&a + &b == (&a + &b).eval());
    assert!(&a + &b != (&a - &b).eval());
    assert!(a == a.clone());
    assert!(a != b);

    let mut b2 = b.clone();

    b2[[1, 1]] = 0;

    assert!(b != b2);

    let m = DenseMat::<i32, 2, 3>::from_rows([[1, 2, 3], [4, 5, 6]]);
    let n = DenseMat::<i32, 3, 2>::from_rows([[7, 8], [9, 10], [11, 12]]);

    assert_eq!((&m * &n).eval(), DenseMat::<i32, 2, 2>::from_rows([[58, 64], [139, 154]]));
    assert_eq!((&n * &m).eval().rows(), 3);

    let t = m.transpose().eval();

    assert_eq!(t, DenseMat::<i32, 3, 2>::from_rows([[1, 4], [2, 5], [3, 6]]));
    assert_eq!(t.rows(), 3);
    assert_eq!(t.cols(), 2);
    assert!(m.transpose().transpose() == m);

    assert_eq!(m.transpose().rows(), 3);
    assert_eq!(m.transpose().cols(), 2);

    let d = DenseMat::<i32, 2, 2>::from_rows([[1, 0], [0, 1]]);
    let e = &a + &b * 2 - d.transpose();

    assert_eq!(e.eval(), DenseMat::<i32, 2, 2>::from_rows([[10, 14], [17, 19]]));

    let p = (&m * &n) * 2i32 + &a;

    assert_eq!(p.eval(), DenseMat::<i32, 2, 2>::from_rows([[117, 130], [281, 312]]));
}

#[test]
fn test_compound_assign() {
    let a = DenseMat::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
    let b = DenseMat::<i32, 2, 2>::from_rows([[5, 6], [7, 8]]);

    let mut m = a.clone();

    m += &b;

    assert_eq!(m, (&a + &b).eval());

    m -= &a;

    assert_eq!(m, b);

    m *= 2;

    assert_eq!(m, (&b * 2).eval());

    m += &a * 0;

    assert_eq!(m, (&b * 2).eval());

    let mut c = a.convert::<DenseStorage<i32, 2, 2, ColMajor>>();

    c += &b;

    assert_eq!(c, (&a + &b).eval());
}

#[test]
fn test_eval() {
    let a = DenseMat::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
    let b = DenseMat::<i32, 2, 2>::from_rows([[5, 6], [7, 8]]);

    let e = &a * &b;
    let m = e.eval();

    for i in 0..2 {
        for j in 0..2 {
            assert_eq!(m[[i, j]], e.eval_at(i, j));
        }
    }

    assert_eq!(e.rows(), 2);
    assert_eq!(e.cols(), 2);

    let cm = Matrix::<i32, 2, 2, DenseStorage<i32, 2, 2, ColMajor>>::from_expr(&(&a + &b));

    assert_eq!(cm.major(), Major::Col);
    assert_eq!(cm, (&a + &b).eval());

    let rm = (&a + &b).eval();

    assert_eq!(rm.major(), Major::Row);

    let c = a.convert::<DenseStorage<i32, 2, 2, ColMajor>>();

    assert_eq!((&c + &c).eval().major(), Major::Col);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let a = DenseMat::<i32, 2, 2>::from_rows([[1, 2], [3, 4]]);
    let c = a.convert::<DenseStorage<i32, 2, 2, ColMajor>>();

    let tokens = [
        Token::Seq { len: Some(2) },
        Token::Seq { len: Some(2) },
        Token::I32(1),
        Token::I32(2),
        Token::SeqEnd,
        Token::Seq { len: Some(2) },
        Token::I32(3),
        Token::I32(4),
        Token::SeqEnd,
        Token::SeqEnd,
    ];

    assert_tokens(&a, &tokens);
    assert_tokens(&c, &tokens);
}
