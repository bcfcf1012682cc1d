use std::path::Path;

use pyo3::{
    prelude::*,
    types::{PyDict, PyTuple},
};

/// Builds a `PyDict` of keyword arguments, propagating `set_item` failures.
macro_rules! pydict {
    ($py:expr $(, $key:literal => $value:expr)* $(,)?) => {{
        let dict = ::pyo3::types::PyDict::new($py);
        $(dict.set_item($key, $value)?;)*
        dict
    }};
}
pub(crate) use pydict;

pub struct PyPlot<'py> {
    plt: Bound<'py, PyModule>,
}

impl<'py> PyPlot<'py> {
    /// Imports `matplotlib.pyplot` on the non-interactive Agg backend
    pub fn new(py: Python<'py>) -> PyResult<Self> {
        py.import("matplotlib")?.call_method1("use", ("Agg",))?;
        let plt = py.import("matplotlib.pyplot")?;
        Ok(Self { plt })
    }

    pub fn subplots(
        &self,
        kwargs: Option<&Bound<'py, PyDict>>,
    ) -> PyResult<(Figure<'py>, Axes<'py>)> {
        let result = self.plt.call_method("subplots", (), kwargs)?;
        let tuple = result.downcast::<PyTuple>()?;
        let fig = Figure::new(tuple.get_item(0)?);
        let ax = Axes::new(tuple.get_item(1)?);
        Ok((fig, ax))
    }

    pub fn savefig(&self, path: &Path, kwargs: Option<&Bound<'py, PyDict>>) -> PyResult<()> {
        self.plt.call_method("savefig", (path,), kwargs)?;
        Ok(())
    }

    pub fn close(&self, figure: Figure<'py>) -> PyResult<()> {
        self.plt.call_method1("close", (figure.fig,))?;
        Ok(())
    }
}

pub struct Figure<'py> {
    fig: Bound<'py, PyAny>,
}

impl<'py> Figure<'py> {
    pub fn new(fig: Bound<'py, PyAny>) -> Self {
        Self { fig }
    }

    pub fn tight_layout(&self) -> PyResult<()> {
        self.fig.call_method0("tight_layout")?;
        Ok(())
    }
}

pub struct Axes<'py> {
    ax: Bound<'py, PyAny>,
}

impl<'py> Axes<'py> {
    pub fn new(ax: Bound<'py, PyAny>) -> Self {
        Self { ax }
    }

    pub fn set_title(&self, title: &str, kwargs: Option<&Bound<'py, PyDict>>) -> PyResult<()> {
        self.ax.call_method("set_title", (title,), kwargs)?;
        Ok(())
    }

    pub fn set_xlabel(&self, label: &str, kwargs: Option<&Bound<'py, PyDict>>) -> PyResult<()> {
        self.ax.call_method("set_xlabel", (label,), kwargs)?;
        Ok(())
    }

    pub fn set_ylabel(&self, label: &str, kwargs: Option<&Bound<'py, PyDict>>) -> PyResult<()> {
        self.ax.call_method("set_ylabel", (label,), kwargs)?;
        Ok(())
    }

    pub fn set_xticks(&self, ticks: &[f64]) -> PyResult<()> {
        self.ax.call_method1("set_xticks", (ticks.to_vec(),))?;
        Ok(())
    }

    pub fn set_xticklabels(
        &self,
        labels: &[String],
        kwargs: Option<&Bound<'py, PyDict>>,
    ) -> PyResult<()> {
        self.ax.call_method("set_xticklabels", (labels.to_vec(),), kwargs)?;
        Ok(())
    }

    pub fn tick_params(&self, kwargs: Option<&Bound<'py, PyDict>>) -> PyResult<()> {
        self.ax.call_method("tick_params", (), kwargs)?;
        Ok(())
    }

    pub fn set_axisbelow(&self, below: bool) -> PyResult<()> {
        self.ax.call_method1("set_axisbelow", (below,))?;
        Ok(())
    }

    pub fn grid(&self, kwargs: Option<&Bound<'py, PyDict>>) -> PyResult<()> {
        self.ax.call_method("grid", (true,), kwargs)?;
        Ok(())
    }

    pub fn legend(&self, kwargs: Option<&Bound<'py, PyDict>>) -> PyResult<()> {
        self.ax.call_method("legend", (), kwargs)?;
        Ok(())
    }

    pub fn bar(
        &self,
        x: Vec<f64>,
        height: Vec<f64>,
        kwargs: Option<&Bound<'py, PyDict>>,
    ) -> PyResult<()> {
        self.ax.call_method("bar", (x, height), kwargs)?;
        Ok(())
    }
}
