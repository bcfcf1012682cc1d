use std::{io, path::Path};

use common::{config::ChartConfig, error::PlotError};
use plot_common::AggregateDataset;
use pyo3::prelude::*;
use tempfile::NamedTempFile;
use tracing::{debug, info};

mod pyplot;

use pyplot::{PyPlot, pydict};

const DEFAULT_FORMAT: &str = "png";
/// Space between the title and the legend sitting on top of the axes
const TITLE_PAD: f64 = 28.0;

/// Renders `dataset` as grouped read/write bars and writes the image to `chart.output`.
///
/// The figure is saved to a temporary file next to the output and renamed
/// over it once complete, so a failed render never leaves a partial image.
pub fn render(dataset: &AggregateDataset, chart: &ChartConfig) -> Result<(), PlotError> {
    let output = chart.output.as_path();
    let dir = output
        .parent()
        .filter(|x| !x.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let format = image_format(output);

    let tmp = staging_file(dir, &format).map_err(|e| PlotError::render(output, e))?;
    debug!("Rendering {} groups to {:?}", dataset.len(), tmp.path());

    Python::with_gil(|py| draw(py, dataset, chart, tmp.path(), &format))
        .map_err(|e| PlotError::render(output, e))?;
    tmp.persist(output)
        .map_err(|e| PlotError::render(output, e.error))?;

    info!("Saved {format} chart to {output:?}");
    Ok(())
}

/// Temporary file in `dir` that is renamed onto the output once written.
///
/// Created 0666 minus the umask, the mode a plainly created output gets.
fn staging_file(dir: &Path, format: &str) -> io::Result<NamedTempFile> {
    let suffix = format!(".{format}");
    let mut builder = tempfile::Builder::new();
    builder.prefix(".fio-plot-").suffix(&suffix);
    #[cfg(unix)]
    {
        use std::{fs::Permissions, os::unix::fs::PermissionsExt};
        builder.permissions(Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// matplotlib format name taken from the output extension
pub fn image_format(output: &Path) -> String {
    output
        .extension()
        .and_then(|x| x.to_str())
        .filter(|x| !x.is_empty())
        .map(|x| x.to_lowercase())
        .unwrap_or_else(|| DEFAULT_FORMAT.to_owned())
}

fn draw(
    py: Python<'_>,
    dataset: &AggregateDataset,
    chart: &ChartConfig,
    path: &Path,
    format: &str,
) -> PyResult<()> {
    let style = &chart.style;
    let plt = PyPlot::new(py)?;
    let figsize = pydict!(py, "figsize" => (style.width_in, style.height_in));
    let (fig, ax) = plt.subplots(Some(&figsize))?;

    let centers = (0..dataset.len()).map(|i| i as f64).collect::<Vec<_>>();
    let (read_offset, write_offset) = style.bar_offsets();
    let series = [
        ("Read", dataset.read_values(), read_offset, &style.read_color),
        ("Write", dataset.write_values(), write_offset, &style.write_color),
    ];
    for (label, values, offset, color) in series {
        let kwargs = pydict!(
            py,
            "width" => style.bar_width,
            "color" => color,
            "label" => label,
            "linewidth" => 0,
        );
        let x = centers.iter().map(|c| c + offset).collect();
        ax.bar(x, values.to_vec(), Some(&kwargs))?;
    }

    ax.set_title(
        &chart.title,
        Some(&pydict!(py, "fontsize" => style.title_font_size, "pad" => TITLE_PAD)),
    )?;
    let label_kwargs = pydict!(py, "fontsize" => style.label_font_size);
    ax.set_xlabel(&chart.x_label, Some(&label_kwargs))?;
    ax.set_ylabel(&chart.y_label, Some(&label_kwargs))?;

    ax.set_xticks(&centers)?;
    ax.set_xticklabels(
        dataset.labels(),
        Some(&pydict!(
            py,
            "rotation" => style.x_tick_rotation,
            "ha" => "right",
            "rotation_mode" => "anchor",
        )),
    )?;
    ax.tick_params(Some(&pydict!(
        py,
        "axis" => "both",
        "labelsize" => style.tick_font_size,
    )))?;

    if style.grid {
        ax.set_axisbelow(true)?;
        ax.grid(Some(&pydict!(py, "linestyle" => "--", "alpha" => 0.6)))?;
    }

    ax.legend(Some(&pydict!(
        py,
        "loc" => "lower center",
        "bbox_to_anchor" => (0.5, 1.0),
        "ncol" => 2,
        "frameon" => false,
    )))?;

    fig.tight_layout()?;
    plt.savefig(path, Some(&pydict!(py, "format" => format)))?;
    plt.close(fig)
}
