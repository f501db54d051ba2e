use serde::Serialize;

use super::markers::Markers;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub declaration : String,
    pub name : String,
}

/// One prototype from a definitions file, valid for the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name : String,
    pub return_type : String,
    /// The source line with all markers substituted
    pub header : String,
    pub raw_args : String,
    pub params : Vec<Parameter>,
    pub is_void_return : bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing `{0}` marker")]
    MissingMarker(String),

    #[error("no `(` after the function name")]
    MissingOpenParen,

    #[error("argument list is not closed with `)`")]
    MissingCloseParen,

    #[error("empty function name")]
    EmptyName,
}

impl Declaration {
    pub fn arg_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.iter().map(|p| p.name.as_str())
    }

    pub fn joined_args(&self) -> String {
        self.arg_names().collect::<Vec<_>>().join(", ")
    }

    pub fn return_prefix(&self) -> &'static str {
        if self.is_void_return { "" } else { "return " }
    }
}

pub fn parse_line(line : &str, markers : &Markers) -> Result<Declaration, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let prefix_at = line.find(&markers.prefix)
        .ok_or_else(|| ParseError::MissingMarker(markers.prefix.clone()))?;
    let after_prefix = prefix_at + markers.prefix.len();

    let open = line[after_prefix..].find('(')
        .map(|i| after_prefix + i)
        .ok_or(ParseError::MissingOpenParen)?;
    let close = line[open + 1..].find(')')
        .map(|i| open + 1 + i)
        .ok_or(ParseError::MissingCloseParen)?;

    // Anything after the first space (a trailing marker, say) is not part of the name
    let name = line[after_prefix..open]
        .trim_start()
        .split(' ')
        .next()
        .unwrap_or_default();
    if name.is_empty() {
        return Err(ParseError::EmptyName);
    }

    let raw_args = &line[open + 1..close];
    let params = raw_args
        .split(", ")
        .map(str::trim)
        .filter(|arg| !arg.is_empty() && *arg != "void")
        .map(|arg| Parameter {
            declaration : arg.to_string(),
            name : arg.split([' ', '*']).last().unwrap_or_default().to_string(),
        })
        .collect();

    let is_void_return = line.split(' ').nth(1) == Some("void");

    let type_start = line.find(&markers.begin)
        .map(|i| i + markers.begin.len())
        .filter(|&i| i <= prefix_at)
        .unwrap_or(0);
    let return_type = line[type_start..prefix_at]
        .replace(&markers.second, "")
        .trim()
        .to_string();

    Ok(Declaration {
        name : name.to_string(),
        return_type,
        header : markers.substitute(line),
        raw_args : raw_args.to_string(),
        params,
        is_void_return,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line : &str) -> Declaration {
        parse_line(line, &Markers::default()).unwrap()
    }

    #[test]
    fn void_function_without_arguments() {
        let decl = parse("BEGIN void PREFIXfoo(void) END");
        assert_eq!(decl.name, "foo");
        assert!(decl.params.is_empty());
        assert!(decl.is_void_return);
        assert_eq!(decl.return_prefix(), "");
        assert_eq!(decl.joined_args(), "");
    }

    #[test]
    fn strips_types_and_pointers() {
        let decl = parse("BEGIN int PREFIX bar(int a, float* b) END");
        assert_eq!(decl.name, "bar");
        assert_eq!(decl.joined_args(), "a, b");
        assert_eq!(decl.return_prefix(), "return ");
        assert_eq!(decl.params[1].declaration, "float* b");
    }

    #[test]
    fn joins_without_stray_separators() {
        let decl = parse("BEGIN void PREFIXbaz(int x, int y, int z) END");
        assert_eq!(decl.joined_args(), "x, y, z");
    }

    #[test]
    fn pointer_bound_to_name() {
        let decl = parse("BEGIN void PREFIXglBitmap(GLsizei width, const GLubyte *bitmap) SECOND END");
        assert_eq!(decl.arg_names().collect::<Vec<_>>(), vec!["width", "bitmap"]);
    }

    #[test]
    fn padded_argument_list() {
        let decl = parse("BEGIN GLboolean PREFIXglIsList( GLuint list ) END");
        assert_eq!(decl.joined_args(), "list");
        assert_eq!(decl.raw_args, " GLuint list ");
    }

    #[test]
    fn name_stops_at_first_space() {
        let decl = parse("BEGIN GLenum PREFIXglGetError SECOND(void) END");
        assert_eq!(decl.name, "glGetError");
        assert_eq!(decl.return_type, "GLenum");
    }

    #[test]
    fn pointer_return_is_not_void() {
        let decl = parse("BEGIN const GLcharARB * PREFIXglGetString(GLenum name) SECOND END");
        assert!(!decl.is_void_return);
        assert_eq!(decl.return_type, "const GLcharARB *");
        assert_eq!(decl.header, "const GLcharARB * expglGetString(GLenum name) STDCALL ");
    }

    #[test]
    fn return_type_drops_calling_convention_marker() {
        let decl = parse("BEGIN void* SECOND PREFIXwglGetProcAddress(const char *name) END");
        assert_eq!(decl.return_type, "void*");
        assert_eq!(decl.header, "void* STDCALL expwglGetProcAddress(const char *name) ");
    }

    #[test]
    fn trailing_newline_is_ignored() {
        let decl = parse("BEGIN void PREFIXglEnd(void) END\r\n");
        assert_eq!(decl.header, "void expglEnd(void) ");
    }

    #[test]
    fn malformed_lines() {
        let markers = Markers::default();
        assert_eq!(
            parse_line("BEGIN void glEnd(void) END", &markers),
            Err(ParseError::MissingMarker("PREFIX".to_string()))
        );
        assert_eq!(parse_line("BEGIN void PREFIXglEnd END", &markers), Err(ParseError::MissingOpenParen));
        assert_eq!(parse_line("BEGIN void PREFIXglEnd(void END", &markers), Err(ParseError::MissingCloseParen));
        assert_eq!(parse_line("BEGIN void PREFIX(void) END", &markers), Err(ParseError::EmptyName));
    }
}
