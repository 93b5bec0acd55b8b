//! Memoized render
//!
//! Wraps a pure render function and skips it when the new props equal
//! the previous ones under the props type's `PartialEq`.

/// Last-props memo around a pure render function
#[derive(Debug)]
pub struct Memo<P, R> {
    render: fn(&P) -> R,
    last: Option<(P, R)>,
    renders: u64,
}

impl<P: PartialEq, R> Memo<P, R> {
    pub fn new(render: fn(&P) -> R) -> Self {
        Self {
            render,
            last: None,
            renders: 0,
        }
    }

    /// Render `props`, reusing the previous output when nothing changed.
    /// Returns the output and whether the render function actually ran.
    pub fn render(&mut self, props: P) -> (&R, bool) {
        let (entry, rendered) = match self.last.take() {
            Some((previous, output)) if previous == props => ((props, output), false),
            _ => {
                let output = (self.render)(&props);
                self.renders += 1;
                ((props, output), true)
            }
        };
        if !rendered {
            tracing::trace!(renders = self.renders, "props unchanged, render skipped");
        }

        let (_, output) = self.last.insert(entry);
        (output, rendered)
    }

    /// Output of the most recent render
    pub fn current(&self) -> Option<&R> {
        self.last.as_ref().map(|(_, output)| output)
    }

    pub fn props(&self) -> Option<&P> {
        self.last.as_ref().map(|(props, _)| props)
    }

    /// How many times the render function has run
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}
