use geo::{Coordinate, GeoFloat, Line, LineString};

/// Interface for inputs that can be searched for crossings.
///
/// A polyline is an ordered sequence of vertices; consecutive pairs form
/// its segments. Inputs with fewer than two vertices have no segments
/// and never take part in a crossing.
///
/// Implemented for [`LineString`], `Vec<Coordinate<T>>` and
/// `[Coordinate<T>]`. Custom types only need to expose their vertices
/// as a slice.
pub trait Polyline {
    type Scalar: GeoFloat;

    /// The vertices of this polyline, in order.
    fn coords(&self) -> &[Coordinate<Self::Scalar>];

    /// Iterate over the segments of this polyline.
    fn segments(&self) -> Segments<'_, Self::Scalar> {
        Segments(self.coords().windows(2))
    }
}

/// Iterator over consecutive segments of a [`Polyline`].
#[derive(Debug, Clone)]
pub struct Segments<'a, T: GeoFloat>(std::slice::Windows<'a, Coordinate<T>>);

impl<'a, T: GeoFloat> Iterator for Segments<'a, T> {
    type Item = Line<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|w| Line::new(w[0], w[1]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T: GeoFloat> ExactSizeIterator for Segments<'a, T> {}

impl<T: GeoFloat> Polyline for LineString<T> {
    type Scalar = T;

    #[inline]
    fn coords(&self) -> &[Coordinate<T>] {
        &self.0
    }
}

impl<T: GeoFloat> Polyline for [Coordinate<T>] {
    type Scalar = T;

    #[inline]
    fn coords(&self) -> &[Coordinate<T>] {
        self
    }
}

impl<T: GeoFloat> Polyline for Vec<Coordinate<T>> {
    type Scalar = T;

    #[inline]
    fn coords(&self) -> &[Coordinate<T>] {
        self
    }
}

impl<'a, P: Polyline + ?Sized> Polyline for &'a P {
    type Scalar = P::Scalar;

    #[inline]
    fn coords(&self) -> &[Coordinate<Self::Scalar>] {
        (**self).coords()
    }
}
