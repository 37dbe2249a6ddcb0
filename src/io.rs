//! Graph output: append-able binary snapshots and JSON export.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::ends::End;
use crate::graph::Graph;
use crate::ChId;

/// Writer of binary graph snapshots.
///
/// Snapshots append to one file; the trailer of each record carries running
/// maxima over the records written so far, so a reader can size its buffers
/// from any record. All fields are little-endian; ids are `u64`, edge
/// weights `f32`, the time stamp `f64`.
pub struct SnapshotWriter {
    path: PathBuf,
    chain_num_max: ChId,
    nn_max: [usize; 2],
    saved_count: u64,
}

impl SnapshotWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotWriter {
            path: path.into(),
            chain_num_max: 0,
            nn_max: [0, 0],
            saved_count: 0,
        }
    }

    /// Appends one snapshot; `start_new` truncates the file first.
    ///
    /// On the final record (`last`) the trailer fields and the step counter
    /// are written as zero.
    pub fn save(&mut self, gr: &Graph, start_new: bool, last: bool, t: f64)
        -> io::Result<()>
    {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(start_new)
            .append(!start_new)
            .open(&self.path)?;
        let mut ofs = BufWriter::new(file);

        ofs.write_f64::<LittleEndian>(t)?;
        ofs.write_u64::<LittleEndian>(gr.chain_num() as u64)?;

        if !last {
            if start_new {
                self.chain_num_max = 0;
                self.nn_max = [0, 0];
                self.saved_count = 0;
            }
            self.chain_num_max = self.chain_num_max.max(gr.chain_num());
        }

        for m in &gr.cn {
            ofs.write_u64::<LittleEndian>(m.length() as u64)?;
            ofs.write_u64::<LittleEndian>(m.idw as u64)?;
            ofs.write_u64::<LittleEndian>(m.idc as u64)?;
            ofs.write_u64::<LittleEndian>(m.c as u64)?;

            for e in End::BOTH {
                let ngs = m.ngs_at(e);
                ofs.write_u64::<LittleEndian>(ngs.num() as u64)?;
                for s in ngs {
                    ofs.write_u64::<LittleEndian>(s.w as u64)?;
                    ofs.write_u64::<LittleEndian>(s.e.idx() as u64)?;
                }
                if !last {
                    self.nn_max[e.idx()] = self.nn_max[e.idx()].max(ngs.num());
                }
            }

            for eg in &m.g {
                ofs.write_u64::<LittleEndian>(eg.ind as u64)?;
                ofs.write_u64::<LittleEndian>(eg.indc as u64)?;
                ofs.write_u64::<LittleEndian>(eg.indw as u64)?;
                ofs.write_u64::<LittleEndian>(eg.w as u64)?;
                ofs.write_u64::<LittleEndian>(eg.c as u64)?;
                let (da, db) = if eg.points_forwards() { (0u64, 1u64) } else { (1, 0) };
                ofs.write_u64::<LittleEndian>(da)?;
                ofs.write_u64::<LittleEndian>(db)?;
                ofs.write_f32::<LittleEndian>(eg.weight)?;
            }
        }

        if last {
            ofs.write_u64::<LittleEndian>(0)?;
            ofs.write_u64::<LittleEndian>(0)?;
            ofs.write_u64::<LittleEndian>(0)?;
            ofs.write_u64::<LittleEndian>(0)?;
        } else {
            self.saved_count += 1;
            ofs.write_u64::<LittleEndian>(self.chain_num_max as u64)?;
            ofs.write_u64::<LittleEndian>(self.nn_max[End::A.idx()] as u64)?;
            ofs.write_u64::<LittleEndian>(self.nn_max[End::B.idx()] as u64)?;
            ofs.write_u64::<LittleEndian>(self.saved_count)?;
        }

        ofs.flush()
    }
}

#[cfg(feature = "serde_support")]
pub use self::json::to_json;

#[cfg(feature = "serde_support")]
mod json {
    //! JSON export of the vertex/link structure.

    use std::io::Write;

    use serde::Serialize;

    use crate::graph::Graph;

    #[derive(Serialize)]
    struct VertexExport {
        d: usize,
        ind: usize,
        w: Vec<usize>,
        e: Vec<usize>,
    }

    #[derive(Serialize)]
    struct LinkExport {
        source_id: usize,
        target_id: usize,
    }

    #[derive(Serialize)]
    struct GraphExport {
        vertices: Vec<VertexExport>,
        links: Vec<LinkExport>,
    }

    /// Writes the graph as `{"vertices": [...], "links": [...]}`.
    ///
    /// Vertex ids are dense in `[0, V)` across all degrees; links follow the
    /// edge insertion order.
    pub fn to_json<W: Write>(gr: &Graph, writer: W) -> serde_json::Result<()> {
        log::info!("exporting graph to json: {} vertices, {} edges",
                   gr.num_vertices_total(), gr.edgenum);

        let vertices = gr.vertices.iter()
            .map(|v| VertexExport {
                d: v.degree(),
                ind: v.ind,
                w: v.ws(),
                e: v.es(),
            })
            .collect();

        let links = (0..gr.edgenum)
            .map(|ind| {
                let [s, t] = gr.edge_vertices(ind);
                LinkExport { source_id: s, target_id: t }
            })
            .collect();

        serde_json::to_writer(writer, &GraphExport { vertices, links })
    }
}
