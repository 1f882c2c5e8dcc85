use crate::slice::*;
use crate::solver::Wavefront;
use crate::stencil::*;
use crate::util::*;
use std::ops::Range;

/// What every thread needs to update its layers for one iteration.
pub struct Sweep<'a, F> {
    pub kernel: &'a Kernel<F>,

    /// Source already scaled by `delta²`.
    pub source: &'a [F],

    pub wavefront: Option<&'a Wavefront>,
}

impl<F: FloatTrait> Sweep<'_, F> {
    /// Update layers `zs` for `iteration`.
    /// `out` holds exactly those layers of the next buffer.
    pub fn layers(
        &self,
        current: &[F],
        zs: Range<usize>,
        out: &mut [F],
        iteration: usize,
    ) {
        let n = self.kernel.n();
        let layer_len = n * n;
        debug_assert_eq!(out.len(), zs.len() * layer_len);

        let (active, window) = match self.wavefront {
            None => (zs.clone(), Window::full(n)),
            Some(wavefront) => match wavefront.region(iteration) {
                None => return,
                Some(region) => {
                    let r = region.axis_range(2);
                    (
                        zs.start.max(r.start)..zs.end.min(r.end),
                        Window::from_aabb(&region),
                    )
                }
            },
        };

        for z in active {
            let slice = Slice::derive(
                current,
                self.source,
                n,
                z,
                self.kernel.boundary(),
            );
            let offset = (z - zs.start) * layer_len;
            self.kernel.process_slice(
                &slice,
                &window,
                &mut out[offset..offset + layer_len],
            );
        }
    }
}
