/*!

This is the long-form manual for `disaster_law` and `dlaw`.

## Input files

Every spreadsheet in the input directory is read (`xlsx`, `xls`, `xlsm`,
`xlsb`, `ods` and `csv` by default). Only the first worksheet of a workbook is
used, and its first row must hold the column names.

Files are processed in lexicographic order of their names. When two files give
a value for the same information about the same jurisdiction, the file that
comes last wins. Pass `--discovery-order` to keep the order in which the
operating system lists the files instead.

### The jurisdiction column

The first column whose name contains `state`, `territory` or `jurisdiction`
(in any case) names the jurisdictions of each row. Files without such a column
are ignored.

A cell of this column may hold:
* one name, spelled exactly as in the list of jurisdictions (`Texas`,
  `U.S. Virgin Islands`, ...)
* a comma-separated list of names. `etc.` and `Others` are accepted and ignored.

Any other content (sentences, links, "varies by state", ...) is treated as a
description and the row is skipped.

### Information columns

The other columns are recognized by fragments of their names, checked in this
order:

| Fragment in the column name               | Information              |
|-------------------------------------------|--------------------------|
| `statute`, `code`                         | key statutes             |
| `local authority`                         | local authority          |
| `notable provision`                       | notable provisions       |
| `vulnerable` and `protection`             | vulnerable protections   |
| `civil rights`, `discrimination`          | civil rights             |
| `disability`, `functional`                | disability needs         |
| `language access`                         | language access          |
| `equity`                                  | equity initiatives       |
| `emergency declaration`                   | emergency declaration    |
| `mitigation`                              | mitigation planning      |
| `mutual aid`                              | mutual aid               |

Columns matching none of them are ignored. Empty cells never erase a value
found earlier.

### Regions

Some file names carry the region of the jurisdictions they describe:

| File name                                 | Region                   |
|-------------------------------------------|--------------------------|
| starts with `CA-WA-OR`                    | West Coast               |
| contains `Southwest`, starts with `SW-`   | Southwest                |
| contains `Midwest`                        | Midwest                  |
| contains `Northeast`                      | Northeast                |
| contains `Appalachia`                     | Appalachia               |
| contains `MTN`                            | Mountain West            |
| contains `AK-HI`                          | Alaska & Hawaii          |
| contains `South` or `Mid-Atlantic`        | Southeast or Mid-Atlantic, for the states of these regions |

The first file that assigns a region to a jurisdiction decides. The others
receive the region of a static table.

## Output

The output has exactly one row for each of the 56 jurisdictions, with its
postal code, region, the eleven information fields and the data availability:
the fraction of the eleven fields that are filled.

*/
