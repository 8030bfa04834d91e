//! Introspection script bodies.
//!
//! Each script runs as a synchronous function body in the page. Locator
//! scripts take their strategy arguments first, then the search root
//! (`null` for the document) and an array of elements to leave out.
//!
//! | Script | Arguments | Returns |
//! |--------|-----------|---------|
//! | [`FIND_BINDINGS`] | binding, exact, root, exclude | elements |
//! | [`FIND_BY_MODEL`] | model, tag, suffix, root, exclude | elements |
//! | [`FIND_REPEATER`] | expr, row, column, root, exclude | `{elements, skipped}` |
//! | [`EVALUATE`] | element, expression | value |
//!
//! Directive attributes are recognized under every prefix spelling:
//! `ng-`, `ng_`, `data-ng-`, `x-ng-` and `ng:`.

/// Finds elements whose binding expression contains (or, when `exact` is
/// set, equals) the requested expression.
pub const FIND_BINDINGS: &str = r#"
var binding = arguments[0];
var exact = arguments[1];
var using = arguments[2] || document;
var exclude = arguments[3] || [];
if (!window.angular) {
  throw new Error('angular could not be found on the window');
}
var prefixes = ['ng-', 'ng_', 'data-ng-', 'x-ng-', 'ng\\:'];
var directives = ['bind', 'bind-template', 'bind-html'];
var selectors = ['.ng-binding'];
for (var p = 0; p < prefixes.length; ++p) {
  for (var d = 0; d < directives.length; ++d) {
    selectors.push('[' + prefixes[p] + directives[d] + ']');
  }
}
var expressionsOf = function(element) {
  var data = angular.element(element).data('$binding');
  var names = [];
  if (data) {
    data = [].concat(data);
    for (var i = 0; i < data.length; ++i) {
      var name = data[i] && data[i].exp !== undefined ? data[i].exp : data[i];
      if (name) {
        names.push(String(name));
      }
    }
  }
  if (!names.length) {
    for (var p = 0; p < prefixes.length; ++p) {
      for (var d = 0; d < directives.length; ++d) {
        var attr = element.getAttribute(prefixes[p].replace(/\\/g, '') + directives[d]);
        if (attr) {
          names.push(attr);
        }
      }
    }
  }
  return names;
};
var candidates = using.querySelectorAll(selectors.join(','));
var matches = [];
for (var i = 0; i < candidates.length; ++i) {
  var element = candidates[i];
  if (exclude.indexOf(element) !== -1) {
    continue;
  }
  var names = expressionsOf(element);
  for (var j = 0; j < names.length; ++j) {
    if (exact ? names[j] === binding : names[j].indexOf(binding) !== -1) {
      matches.push(element);
      break;
    }
  }
}
return matches;
"#;

/// Finds controls bound to a model path, optionally narrowed to one tag
/// and a trailing selector (`' option:checked'` for selected options).
pub const FIND_BY_MODEL: &str = r#"
var model = arguments[0];
var tag = arguments[1] || '';
var suffix = arguments[2] || '';
var using = arguments[3] || document;
var exclude = arguments[4] || [];
if (!window.angular) {
  throw new Error('angular could not be found on the window');
}
var prefixes = ['ng-', 'ng_', 'data-ng-', 'x-ng-', 'ng\\:'];
var quoted = model.replace(/(["\\])/g, '\\$1');
var selectors = [];
for (var p = 0; p < prefixes.length; ++p) {
  selectors.push(tag + '[' + prefixes[p] + 'model="' + quoted + '"]' + suffix);
}
var found = using.querySelectorAll(selectors.join(','));
var matches = [];
for (var i = 0; i < found.length; ++i) {
  if (exclude.indexOf(found[i]) === -1) {
    matches.push(found[i]);
  }
}
return matches;
"#;

/// Finds the elements of a repeated block.
///
/// Rows come back in document order. Multi-element rows
/// (`-repeat-start` ... `-repeat-end`) contribute every element of the
/// span. Rows outside the first row's container are dropped and counted
/// in `skipped`.
pub const FIND_REPEATER: &str = r#"
var repeater = arguments[0];
var row = arguments[1];
var column = arguments[2];
var using = arguments[3] || document;
var exclude = arguments[4] || [];
var prefixes = ['ng-', 'ng_', 'data-ng-', 'x-ng-', 'ng\\:'];
var repeats = function(element, attr) {
  var value = element.getAttribute(attr);
  return value !== null && value.indexOf(repeater) !== -1;
};
var rows = [];
for (var p = 0; p < prefixes.length; ++p) {
  var attr = prefixes[p] + 'repeat';
  var plain = attr.replace(/\\/g, '');
  var singles = using.querySelectorAll('[' + attr + ']');
  for (var i = 0; i < singles.length; ++i) {
    if (repeats(singles[i], plain)) {
      rows.push([singles[i]]);
    }
  }
  var starts = using.querySelectorAll('[' + attr + '-start]');
  for (var i = 0; i < starts.length; ++i) {
    if (!repeats(starts[i], plain + '-start')) {
      continue;
    }
    var group = [];
    var node = starts[i];
    while (node) {
      if (node.nodeType === 1) {
        group.push(node);
        if (node.hasAttribute(plain + '-end')) {
          break;
        }
      }
      node = node.nextSibling;
    }
    rows.push(group);
  }
}
rows.sort(function(a, b) {
  if (a[0] === b[0]) {
    return 0;
  }
  return a[0].compareDocumentPosition(b[0]) & 4 ? -1 : 1;
});
var skipped = 0;
if (rows.length) {
  var container = rows[0][0].parentNode;
  var kept = [];
  for (var i = 0; i < rows.length; ++i) {
    if (rows[i][0].parentNode === container) {
      kept.push(rows[i]);
    } else {
      skipped += 1;
    }
  }
  rows = kept;
}
if (row !== null && row !== undefined) {
  rows = row < rows.length ? [rows[row]] : [];
}
var elements = [];
if (column === null || column === undefined) {
  for (var r = 0; r < rows.length; ++r) {
    for (var i = 0; i < rows[r].length; ++i) {
      elements.push(rows[r][i]);
    }
  }
} else {
  if (!window.angular) {
    throw new Error('angular could not be found on the window');
  }
  var strip = function(text) {
    return String(text).replace(/^\s*\{\{\s*/, '').replace(/\s*\}\}\s*$/, '');
  };
  var wanted = strip(column);
  var directives = ['bind', 'bind-template', 'bind-html'];
  var selectors = ['.ng-binding'];
  for (var p = 0; p < prefixes.length; ++p) {
    for (var d = 0; d < directives.length; ++d) {
      selectors.push('[' + prefixes[p] + directives[d] + ']');
    }
  }
  var namesOf = function(element) {
    var data = angular.element(element).data('$binding');
    var names = [];
    if (data) {
      data = [].concat(data);
      for (var i = 0; i < data.length; ++i) {
        var name = data[i] && data[i].exp !== undefined ? data[i].exp : data[i];
        if (name) {
          names.push(String(name));
        }
      }
    }
    if (!names.length) {
      for (var p = 0; p < prefixes.length; ++p) {
        for (var d = 0; d < directives.length; ++d) {
          var attr = element.getAttribute(prefixes[p].replace(/\\/g, '') + directives[d]);
          if (attr) {
            names.push(attr);
          }
        }
      }
    }
    return names;
  };
  var bound = function(element) {
    var names = namesOf(element);
    for (var i = 0; i < names.length; ++i) {
      if (strip(names[i]).indexOf(wanted) !== -1) {
        return true;
      }
    }
    return false;
  };
  for (var r = 0; r < rows.length; ++r) {
    for (var i = 0; i < rows[r].length; ++i) {
      var cell = rows[r][i];
      var nested = cell.querySelectorAll(selectors.join(','));
      var candidates = [cell].concat([].slice.call(nested));
      for (var c = 0; c < candidates.length; ++c) {
        if (bound(candidates[c])) {
          elements.push(candidates[c]);
        }
      }
    }
  }
}
var result = [];
for (var i = 0; i < elements.length; ++i) {
  if (exclude.indexOf(elements[i]) === -1) {
    result.push(elements[i]);
  }
}
return { elements: result, skipped: skipped };
"#;

/// Evaluates an expression against the scope attached to an element.
pub const EVALUATE: &str = r#"
var element = arguments[0];
var expression = arguments[1];
if (!window.angular) {
  throw new Error('angular could not be found on the window');
}
return angular.element(element).scope().$eval(expression);
"#;

// ============================================================================
// Tests
// ============================================================================
