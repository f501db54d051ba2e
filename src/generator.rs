use std::io::Write;

use anyhow::Result;

use crate::cli::Emit;
use crate::parser::declaration::Declaration;

/// Stub block forwarding to `<call_prefix><name>`, followed by one blank line.
pub fn render_stub(decl : &Declaration, call_prefix : &str) -> String {
    format!(
        "{}{{\n    {}{}{}({});\n}}\n\n",
        decl.header,
        decl.return_prefix(),
        call_prefix,
        decl.name,
        decl.joined_args()
    )
}

/// Stub block that looks the target up through `GL_GetProcAddress` on first call.
pub fn render_lazy(decl : &Declaration) -> String {
    let pointer = format!("p{}", decl.name);
    format!(
        "{header}{{\n    static {ret} ( *{pointer} )({raw}) = NULL;\n    \
         if ( !{pointer} ) {pointer} = GL_GetProcAddress(\"{name}\");\n    \
         {prefix}{pointer}({args});\n}}\n\n",
        header = decl.header,
        ret = decl.return_type,
        raw = decl.raw_args,
        name = decl.name,
        prefix = decl.return_prefix(),
        args = decl.joined_args(),
    )
}

pub fn render_pointer(decl : &Declaration, call_prefix : &str) -> String {
    format!(
        "extern {} ( *{}{} )({});\n",
        decl.return_type, call_prefix, decl.name, decl.raw_args
    )
}

pub struct Generator {
    emit : Emit,
    call_prefix : String,
    // JSON is written as one array, so records are held until finish()
    pending : Vec<Declaration>,
    written : usize,
}

impl Generator {
    pub fn new(emit : Emit, call_prefix : &str) -> Self {
        Self { emit, call_prefix : call_prefix.to_string(), pending : Vec::new(), written : 0 }
    }

    pub fn push<W : Write>(&mut self, out : &mut W, decl : Declaration) -> Result<()> {
        match self.emit {
            Emit::Stubs => out.write_all(render_stub(&decl, &self.call_prefix).as_bytes())?,
            Emit::Lazy => out.write_all(render_lazy(&decl).as_bytes())?,
            Emit::Pointers => out.write_all(render_pointer(&decl, &self.call_prefix).as_bytes())?,
            Emit::Json => self.pending.push(decl),
        }
        self.written += 1;
        Ok(())
    }

    /// Flush anything buffered and return the number of declarations emitted.
    pub fn finish<W : Write>(mut self, out : &mut W) -> Result<usize> {
        if self.emit == Emit::Json {
            serde_json::to_writer_pretty(&mut *out, &self.pending)?;
            writeln!(out)?;
            self.pending.clear();
        }
        out.flush()?;
        Ok(self.written)
    }
}
