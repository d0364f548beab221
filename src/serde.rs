use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use serde::de::{Error, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matrix::Matrix;
use crate::storage::{Scalar, Storage};

struct RowSer<'a, T, const R: usize, const C: usize, S> {
    matrix: &'a Matrix<T, R, C, S>,
    row: usize,
}

impl<T, const R: usize, const C: usize, S> Serialize for RowSer<'_, T, R, C, S>
where
    T: Scalar + Serialize,
    S: Storage<T, R, C>,
{
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        let mut seq = serializer.serialize_seq(Some(C))?;

        for j in 0..C {
            seq.serialize_element(&self.matrix[[self.row, j]])?;
        }

        seq.end()
    }
}

impl<T, const R: usize, const C: usize, S> Serialize for Matrix<T, R, C, S>
where
    T: Scalar + Serialize,
    S: Storage<T, R, C>,
{
    fn serialize<Sr: Serializer>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
        let mut seq = serializer.serialize_seq(Some(R))?;

        for i in 0..R {
            seq.serialize_element(&RowSer { matrix: self, row: i })?;
        }

        seq.end()
    }
}

struct MatrixVisitor<T, const R: usize, const C: usize, S> {
    marker: PhantomData<(T, S)>,
}

impl<'de, T, const R: usize, const C: usize, S> Visitor<'de> for MatrixVisitor<T, R, C, S>
where
    T: Scalar + Deserialize<'de>,
    S: Storage<T, R, C>,
{
    type Value = Matrix<T, R, C, S>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "a matrix of {} rows with {} elements each", R, C)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut elems = Vec::with_capacity(R * C);
        let mut rows = 0;

        while let Some(row) = seq.next_element::<Vec<T>>()? {
            if rows == R {
                let msg = format!("too many rows, expected {}", R);

                return Err(A::Error::custom(msg));
            }

            if row.len() != C {
                let msg = format!("invalid row length {}, expected {}", row.len(), C);

                return Err(A::Error::custom(msg));
            }

            elems.extend(row);
            rows += 1;
        }

        if rows != R {
            let msg = format!("invalid number of rows {}, expected {}", rows, R);

            return Err(A::Error::custom(msg));
        }

        Ok(Matrix::from_fn(|i, j| elems[i * C + j]))
    }
}

impl<'de, T, const R: usize, const C: usize, S> Deserialize<'de> for Matrix<T, R, C, S>
where
    T: Scalar + Deserialize<'de>,
    S: Storage<T, R, C>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(MatrixVisitor { marker: PhantomData })
    }
}
